//! Splash screen rendering with ASCII art logo

use crate::state::{SplashState, TAGLINE};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the STUNNER text with styling
fn build_stunner_text() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Yellow);
    vec![
        Line::from(Span::styled(
            "  ███████╗████████╗██╗   ██╗███╗   ██╗███╗   ██╗███████╗██████╗ ",
            style,
        )),
        Line::from(Span::styled(
            "  ██╔════╝╚══██╔══╝██║   ██║████╗  ██║████╗  ██║██╔════╝██╔══██╗",
            style,
        )),
        Line::from(Span::styled(
            "  ███████╗   ██║   ██║   ██║██╔██╗ ██║██╔██╗ ██║█████╗  ██████╔╝",
            style,
        )),
        Line::from(Span::styled(
            "  ╚════██║   ██║   ██║   ██║██║╚██╗██║██║╚██╗██║██╔══╝  ██╔══██╗",
            style,
        )),
        Line::from(Span::styled(
            "  ███████║   ██║   ╚██████╔╝██║ ╚████║██║ ╚████║███████╗██║  ██║",
            style,
        )),
        Line::from(Span::styled(
            "  ╚══════╝   ╚═╝    ╚═════╝ ╚═╝  ╚═══╝╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝",
            style,
        )),
    ]
}

/// Build the tagline line with its staggered letter reveal
fn build_tagline(visible_letters: usize) -> Line<'static> {
    let revealed: String = TAGLINE
        .chars()
        .take(visible_letters)
        .flat_map(|c| [c, ' '])
        .collect();
    Line::from(Span::styled(
        revealed,
        Style::default().fg(Color::DarkGray),
    ))
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let mut lines = build_stunner_text();
    lines.push(Line::from(""));
    lines.push(build_tagline(splash_state.visible_tagline_letters()));

    let logo_height = lines.len() as u16;
    let logo_width = 66u16;

    // Center position with scroll offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    // Lines scroll off the top first
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };

    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint at the bottom, hidden once the scroll starts
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        let hint_y = area.y + area.height - 2;

        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        let hint_area = Rect {
            x: hint_x,
            y: hint_y,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
