//! Notification dialog component

use super::base::{render_dialog, DialogConfig};
use crate::state::{Notification, NotificationKind};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a notification overlay centered on the screen
pub fn render_notification_dialog(frame: &mut Frame, notification: &Notification) {
    let color = match notification.kind {
        NotificationKind::Success => Color::Green,
        NotificationKind::Error => Color::Red,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: notification.kind.title(),
            title_color: color,
            border_color: color,
            message: &notification.message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
