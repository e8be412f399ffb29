//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Screen;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Draw the status bar: a toast when one is active, key hints otherwise
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let bar_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let line = if let Some(ref toast) = app.state.toast {
        Line::from(Span::styled(
            format!(" {} ", toast.message),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ))
    } else {
        hint_line(app)
    };

    frame.render_widget(Paragraph::new(line), bar_area);
}

fn hint_line(app: &App) -> Line<'static> {
    let hints: &[(&str, &str)] = match app.state.current_screen {
        Screen::Splash => &[],
        Screen::Login => &[
            ("Tab", "next field"),
            ("Enter", "log in"),
            ("Esc", "quit"),
        ],
        Screen::Signup => &[
            ("Tab", "next field"),
            ("Enter", "submit"),
            ("Esc", "back"),
        ],
        Screen::Verify => &[("q", "quit")],
    };

    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(
            format!(": {action}  "),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}
