//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod theme;

pub use forms::MemoizedField;

use crate::app::App;
use components::render_notification_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_signup_form(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notifications are modal and drawn last
    if let Some(notification) = app.notifications.current() {
        render_notification_dialog(frame, notification);
    }
}
