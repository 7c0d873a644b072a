//! Layout components (form container, status bar)

use crate::app::App;
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form container and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Center a card of the given size inside `area`, shrinking it to fit
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (indicator, text) = match app.form.phase() {
        FormPhase::Idle => (
            Span::styled(" ● ", Style::default().fg(Color::Green)),
            "Ready",
        ),
        FormPhase::Invalid => (
            Span::styled(" ● ", Style::default().fg(Color::Red)),
            "Fix the highlighted fields",
        ),
        FormPhase::Submitting => (
            Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
            "Submitting signup request...",
        ),
    };

    let spans = vec![
        indicator,
        Span::styled(text, Style::default().fg(Color::White)),
    ];
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
