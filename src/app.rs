//! Application orchestration and key handling
//!
//! The event loop owns the UI thread; the only asynchronous operation is the
//! signup submission, which runs in a spawned task and reports back through
//! an mpsc channel so all visible state is mutated on this side.

use crate::auth;
use crate::client::{SignupApi, SubmissionOutcome};
use crate::state::{
    AppState, Form, ResolveAction, Screen, SplashState, SubmitFlow, TriggerAction,
};
use crate::validate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A character key counts as text input only without Ctrl/Alt held
/// (Shift stays allowed: uppercase letters arrive with it set)
fn is_text_input(key: KeyEvent) -> bool {
    key.modifiers
        .intersection(KeyModifiers::CONTROL | KeyModifiers::ALT)
        .is_empty()
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Signup submission flow
    pub signup_flow: SubmitFlow,
    /// Client used for signup submission
    client: Arc<dyn SignupApi>,
    /// Sender handed to the submission task
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    /// Receives the submission outcome on the UI side
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Handle of the in-flight submission task, if any
    inflight: Option<JoinHandle<()>>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance starting on the splash screen
    #[allow(clippy::field_reassign_with_default)]
    pub fn new(client: Arc<dyn SignupApi>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        state.current_screen = Screen::Splash;

        Self {
            state,
            splash_state: Some(SplashState::new()),
            signup_flow: SubmitFlow::new(),
            client,
            outcome_tx,
            outcome_rx,
            inflight: None,
            quit: false,
        }
    }

    /// Update splash animation state.
    /// Returns true if the animation completed and we moved to login.
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.navigate_to(Screen::Login);
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_screen, Screen::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.clear_expired_toast();
        if self.inflight.as_ref().is_some_and(JoinHandle::is_finished) {
            self.inflight = None;
        }
    }

    /// Drain submission outcomes delivered by the spawned task
    pub fn poll_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.handle_outcome(outcome);
        }
    }

    fn handle_outcome(&mut self, outcome: SubmissionOutcome) {
        match self.signup_flow.resolve(outcome) {
            ResolveAction::Navigate => {
                tracing::info!("Signup accepted, moving to verification");
                self.state.navigate_to(Screen::Verify);
            }
            ResolveAction::Fail(message) => self.state.show_toast(message),
            ResolveAction::Ignored => {}
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_screen {
            Screen::Splash => {
                // Any key skips the animation
                if let Some(ref mut splash) = self.splash_state {
                    splash.skip();
                }
            }
            Screen::Login => self.handle_login_key(key),
            Screen::Signup => self.handle_signup_key(key),
            Screen::Verify => self.handle_verify_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.login_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.login_form.prev_field(),
            // Chords with Ctrl/Alt are key bindings, not text input
            KeyCode::Char(c) if is_text_input(key) => {
                self.state.login_form.get_active_field_mut().push_char(c)
            }
            KeyCode::Backspace => self.state.login_form.get_active_field_mut().pop_char(),
            KeyCode::Enter => self.submit_login(),
            _ => {}
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.navigate_to(Screen::Login),
            KeyCode::Tab | KeyCode::Down => self.state.signup_form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.signup_form.prev_field(),
            KeyCode::Char(c) if is_text_input(key) => {
                self.state.signup_form.get_active_field_mut().push_char(c)
            }
            KeyCode::Backspace => self.state.signup_form.get_active_field_mut().pop_char(),
            KeyCode::Enter => self.submit_signup(),
            _ => {}
        }
    }

    fn handle_verify_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    /// Run the login check: validation, then the local credential check
    fn submit_login(&mut self) {
        match validate::validate_login(&self.state.login_form) {
            Ok(credentials) => match auth::check_login(&credentials) {
                Ok(()) => {
                    tracing::info!("Login successful");
                    self.state.navigate_to(Screen::Signup);
                }
                Err(e) => self.state.show_toast(e.to_string()),
            },
            Err(e) => self.state.show_toast(e.to_string()),
        }
    }

    /// Trigger the signup flow; dispatches the network call when validation
    /// passes. Re-entrant triggers are ignored by the flow's Submitting gate.
    fn submit_signup(&mut self) {
        match self.signup_flow.trigger(&self.state.signup_form) {
            TriggerAction::Dispatch(request) => {
                let client = Arc::clone(&self.client);
                let tx = self.outcome_tx.clone();
                self.inflight = Some(tokio::spawn(async move {
                    let outcome = client.submit(request).await;
                    // Receiver only drops on shutdown
                    let _ = tx.send(outcome);
                }));
            }
            TriggerAction::Reject(message) => self.state.show_toast(message),
            TriggerAction::Ignored => {}
        }
    }
}
