//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// The three inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Username,
    Password,
    ConfirmPassword,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 3] = [
        FieldName::Username,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Input name, also used as the field id
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Username => "Enter your username",
            Self::Password => "Enter your password",
            Self::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn input_type(&self) -> InputType {
        match self {
            Self::Username => InputType::Text,
            Self::Password | Self::ConfirmPassword => InputType::Password,
        }
    }

    /// Autocomplete hint for password managers
    pub fn auto_complete(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password | Self::ConfirmPassword => "new-password",
        }
    }

    /// Position of the field in `ALL`
    pub fn index(&self) -> usize {
        match self {
            Self::Username => 0,
            Self::Password => 1,
            Self::ConfirmPassword => 2,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Kind of input control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
        }
    }
}

/// Current values of the form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormData {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Username => self.username = value,
            FieldName::Password => self.password = value,
            FieldName::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// Per-field validation messages; a present entry marks the field invalid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

impl FormErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FieldName, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    /// Clear the error for one field, returning whether one was set
    pub fn clear(&mut self, field: FieldName) -> bool {
        self.slot_mut(field).take().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of fields currently in error
    pub fn len(&self) -> usize {
        FieldName::ALL
            .iter()
            .filter(|field| self.slot(**field).is_some())
            .count()
    }

    /// Iterate over `(field, message)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    fn slot(&self, field: FieldName) -> &Option<String> {
        match field {
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut Option<String> {
        match field {
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
        }
    }
}
