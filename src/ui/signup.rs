//! Signup screen rendering

use super::forms::draw_field;
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Phone
            Constraint::Length(1), // Submission indicator
            Constraint::Min(0),
        ])
        .margin(2)
        .split(area);

    let form = &app.state.signup_form;
    draw_field(
        frame,
        chunks[0],
        &form.first_name,
        form.active_field_index == 0,
    );
    draw_field(
        frame,
        chunks[1],
        &form.last_name,
        form.active_field_index == 1,
    );
    draw_field(frame, chunks[2], &form.phone, form.active_field_index == 2);

    if app.signup_flow.is_submitting() {
        let indicator = Paragraph::new(Line::from(Span::styled(
            "Submitting…",
            Style::default().fg(Color::Yellow),
        )));
        frame.render_widget(indicator, chunks[3]);
    }
}
