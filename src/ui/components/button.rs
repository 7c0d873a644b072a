//! Button component for TUI

use crate::ui::theme::{resolve, StyleClass};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Submit button label for the current submission state
pub fn submit_button_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Creating Account..."
    } else {
        "Create Account"
    }
}

/// Classes applied to the submit button
pub fn submit_button_classes(is_submitting: bool) -> Vec<StyleClass> {
    let mut classes = vec![StyleClass::SubmitButton];
    if is_submitting {
        classes.push(StyleClass::SubmitButtonLoading);
    }
    classes
}

/// Render a generic button with border
fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    base_style: Style,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        base_style
    };

    let text_style = if is_selected && is_enabled {
        base_style.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the form's submit button; it is disabled while submitting
pub fn render_submit_button(frame: &mut Frame, area: Rect, is_submitting: bool, is_selected: bool) {
    let style = resolve(&submit_button_classes(is_submitting));
    render_button(
        frame,
        area,
        submit_button_label(is_submitting),
        style,
        is_selected,
        !is_submitting,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(submit_button_label(false), "Create Account");
        assert_eq!(submit_button_label(true), "Creating Account...");
    }

    #[test]
    fn test_loading_class_only_while_submitting() {
        assert_eq!(submit_button_classes(false), vec![StyleClass::SubmitButton]);
        assert_eq!(
            submit_button_classes(true),
            vec![StyleClass::SubmitButton, StyleClass::SubmitButtonLoading]
        );
    }
}
