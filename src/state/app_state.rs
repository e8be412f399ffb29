//! Application state definitions

use crate::state::{LoginForm, SignupForm};
use std::time::{Duration, Instant};

/// Current screen in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Login,
    Signup,
    /// Post-signup confirmation (verification code entry point)
    Verify,
}

/// Transient feedback message shown in the status bar
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    shown_at: Instant,
}

impl Toast {
    /// How long a toast stays visible
    const DURATION: Duration = Duration::from_millis(2800);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::DURATION
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_screen: Screen,

    // Per-screen form state
    pub login_form: LoginForm,
    pub signup_form: SignupForm,

    // Feedback
    pub toast: Option<Toast>,
}

impl AppState {
    /// Navigate to a screen, recreating its form so no stale input survives
    pub fn navigate_to(&mut self, screen: Screen) {
        match screen {
            Screen::Login => self.login_form = LoginForm::new(),
            Screen::Signup => self.signup_form = SignupForm::new(),
            Screen::Splash | Screen::Verify => {}
        }
        self.current_screen = screen;
    }

    /// Show a transient message, replacing any current one
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Drop the toast once its display time is up
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}
