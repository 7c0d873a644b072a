//! Signup form rendering

use super::field_renderer::{draw_field, FieldProps, FIELD_HEIGHT};
use crate::app::{App, Focus};
use crate::state::FieldName;
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_card;
use crate::ui::theme::StyleClass;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 60;
/// Borders, spacer, three fields, button, help line
const CARD_HEIGHT: u16 = 2 + 1 + 3 * FIELD_HEIGHT + BUTTON_HEIGHT + 1;

/// Draw the signup card centered in `area`
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &mut App) {
    frame.render_widget(
        Block::default().style(StyleClass::SignupFormContainer.style()),
        area,
    );
    let card = centered_card(area, CARD_WIDTH, CARD_HEIGHT);

    let block = Block::default()
        .title(Span::styled(
            " Create Account ",
            StyleClass::SignupFormTitle.style(),
        ))
        .borders(Borders::ALL)
        .border_style(StyleClass::SignupFormCard.style());
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(card);

    let form_area = Rect {
        height: chunks[5].bottom().saturating_sub(chunks[1].y),
        ..chunks[1]
    };
    frame.render_widget(
        Block::default().style(StyleClass::SignupForm.style()),
        form_area,
    );

    for field in FieldName::ALL {
        let focused = app.focus == Focus::Field(field);
        let props = FieldProps::for_field(field, &app.form, focused);
        let rendered = app.fields[field.index()].render(props);
        draw_field(frame, chunks[1 + field.index()], rendered);
    }

    render_submit_button(
        frame,
        chunks[4],
        app.form.is_submitting(),
        app.focus == Focus::SubmitButton,
    );

    let key_style = Style::default().fg(Color::Cyan);
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", key_style),
        Span::raw(": next  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": submit  "),
        Span::styled(crate::platform::RESET_SHORTCUT, key_style),
        Span::raw(": reset  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}
