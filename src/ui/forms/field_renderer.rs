//! Field rendering utilities for forms

use crate::state::{FieldName, InputType, SignupForm};
use crate::ui::theme::{resolve, StyleClass};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// Everything a rendered field depends on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps {
    pub name: FieldName,
    pub input_type: InputType,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
    pub placeholder: &'static str,
    pub disabled: bool,
    pub auto_complete: &'static str,
    pub focused: bool,
}

impl FieldProps {
    /// Props for one field of the signup form
    pub fn for_field(field: FieldName, form: &SignupForm, focused: bool) -> Self {
        Self {
            name: field,
            input_type: field.input_type(),
            label: field.label(),
            value: form.form_data().get(field).to_string(),
            error: form.errors().get(field).map(str::to_string),
            placeholder: field.placeholder(),
            disabled: form.is_submitting(),
            auto_complete: field.auto_complete(),
            focused,
        }
    }
}

/// Output of rendering one field, ready to be drawn
#[derive(Debug, Clone)]
pub struct RenderedField {
    pub label: String,
    pub input: Line<'static>,
    pub border_style: Style,
    pub error: Option<Line<'static>>,
    pub classes: Vec<StyleClass>,
}

#[cfg(test)]
impl RenderedField {
    pub fn has_class(&self, class: StyleClass) -> bool {
        self.classes.contains(&class)
    }
}

/// Render a field from its props
pub fn render_field(props: &FieldProps) -> RenderedField {
    let mut classes = vec![
        StyleClass::FormGroup,
        StyleClass::FormLabel,
        StyleClass::FormInput,
    ];
    let mut input_classes = vec![StyleClass::FormInput];
    if props.error.is_some() {
        classes.push(StyleClass::FormInputError);
        input_classes.push(StyleClass::FormInputError);
    }

    let border_style = if props.error.is_some() {
        resolve(&input_classes)
    } else if props.disabled {
        Style::default().fg(Color::DarkGray)
    } else if props.focused {
        Style::default().fg(Color::Cyan)
    } else {
        resolve(&input_classes)
    };

    let text_style = if props.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = if props.value.is_empty() {
        vec![Span::styled(
            props.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        let shown = match props.input_type {
            InputType::Text => props.value.clone(),
            InputType::Password => "•".repeat(props.value.chars().count()),
        };
        vec![Span::styled(shown, text_style)]
    };

    if props.focused && !props.disabled {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if props.value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let error = props.error.as_ref().map(|message| {
        classes.push(StyleClass::FormError);
        Line::from(Span::styled(message.clone(), StyleClass::FormError.style()))
    });

    RenderedField {
        label: format!("{} *", props.label),
        input: Line::from(spans),
        border_style,
        error,
        classes,
    }
}

/// Field renderer that only rebuilds its output when its props change
#[derive(Debug, Default)]
pub struct MemoizedField {
    cached: Option<(FieldProps, RenderedField)>,
    renders: usize,
}

impl MemoizedField {
    pub fn render(&mut self, props: FieldProps) -> &RenderedField {
        let entry = match self.cached.take() {
            Some((cached, rendered)) if cached == props => (cached, rendered),
            _ => {
                self.renders += 1;
                let rendered = render_field(&props);
                tracing::trace!(
                    field = %props.name,
                    input_type = props.input_type.as_str(),
                    auto_complete = props.auto_complete,
                    classes = ?rendered.classes.iter().map(StyleClass::as_str).collect::<Vec<_>>(),
                    renders = self.renders,
                    "rendered field"
                );
                (props, rendered)
            }
        };
        &self.cached.insert(entry).1
    }

    /// How many times the output was rebuilt
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

/// Draw a rendered field: bordered input with the label as title, error below
pub fn draw_field(frame: &mut Frame, area: Rect, field: &RenderedField) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", field.label),
            StyleClass::FormLabel.style(),
        ))
        .borders(Borders::ALL)
        .border_style(field.border_style);

    frame.render_widget(Paragraph::new(field.input.clone()).block(block), chunks[0]);

    if let Some(error) = &field.error {
        frame.render_widget(Paragraph::new(error.clone()), chunks[1]);
    }
}
