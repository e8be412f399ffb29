//! UI module for rendering the TUI

mod forms;
mod layout;
mod login;
mod signup;
mod splash;
mod verify;

use crate::app::App;
use crate::state::Screen;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Splash takes over the whole frame
    if let Some(ref splash_state) = app.splash_state {
        if matches!(app.state.current_screen, Screen::Splash) {
            splash::draw(frame, area, splash_state);
            return;
        }
    }

    let content_area = layout::create_layout(area);

    match app.state.current_screen {
        Screen::Splash => {} // handled above
        Screen::Login => login::draw(frame, content_area, app),
        Screen::Signup => signup::draw(frame, content_area, app),
        Screen::Verify => verify::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);
}
