//! Style class hooks for the signup form
//!
//! Each rendered piece of the form is tagged with the classes that apply to
//! it, and every class maps to one terminal style.

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    FormGroup,
    FormLabel,
    FormInput,
    FormInputError,
    FormError,
    SignupFormContainer,
    SignupFormCard,
    SignupFormTitle,
    SignupForm,
    SubmitButton,
    SubmitButtonLoading,
}

impl StyleClass {
    /// Class hook name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormGroup => "form-group",
            Self::FormLabel => "form-label",
            Self::FormInput => "form-input",
            Self::FormInputError => "form-input--error",
            Self::FormError => "form-error",
            Self::SignupFormContainer => "signup-form-container",
            Self::SignupFormCard => "signup-form-card",
            Self::SignupFormTitle => "signup-form-title",
            Self::SignupForm => "signup-form",
            Self::SubmitButton => "submit-button",
            Self::SubmitButtonLoading => "submit-button--loading",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::FormGroup | Self::SignupForm | Self::SignupFormContainer => Style::default(),
            Self::FormLabel => Style::default().fg(Color::White),
            Self::FormInput => Style::default().fg(Color::DarkGray),
            Self::FormInputError => Style::default().fg(Color::Red),
            Self::FormError => Style::default().fg(Color::Red),
            Self::SignupFormCard => Style::default().fg(Color::Cyan),
            Self::SignupFormTitle => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Self::SubmitButton => Style::default().fg(Color::Green),
            Self::SubmitButtonLoading => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Combine class styles in order; later classes override earlier ones
pub fn resolve(classes: &[StyleClass]) -> Style {
    classes
        .iter()
        .fold(Style::default(), |style, class| style.patch(class.style()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(StyleClass::FormInputError.as_str(), "form-input--error");
        assert_eq!(StyleClass::SubmitButtonLoading.as_str(), "submit-button--loading");
        assert_eq!(StyleClass::SignupFormCard.as_str(), "signup-form-card");
    }

    #[test]
    fn test_error_class_overrides_input_color() {
        let style = resolve(&[StyleClass::FormInput, StyleClass::FormInputError]);
        assert_eq!(style.fg, Some(Color::Red));
    }

    #[test]
    fn test_resolve_empty_is_default() {
        assert_eq!(resolve(&[]), Style::default());
    }
}
