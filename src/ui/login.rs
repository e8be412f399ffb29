//! Login screen rendering

use super::forms::draw_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the login screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Log In ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let form = &app.state.login_form;
    draw_field(frame, chunks[0], &form.email, form.active_field_index == 0);
    draw_field(
        frame,
        chunks[1],
        &form.password,
        form.active_field_index == 1,
    );
}
