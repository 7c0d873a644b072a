//! Signup form validation rules

use super::field::{FieldName, FormData, FormErrors};

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm password is required";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Validate the form data, returning an error for every failing field.
///
/// Only the username is trimmed; passwords are compared verbatim, so a
/// whitespace-only password counts as provided.
pub fn validate(data: &FormData) -> FormErrors {
    let mut errors = FormErrors::default();

    if data.username.trim().is_empty() {
        errors.set(FieldName::Username, USERNAME_REQUIRED);
    }

    if data.password.is_empty() {
        errors.set(FieldName::Password, PASSWORD_REQUIRED);
    }

    if data.confirm_password.is_empty() {
        errors.set(FieldName::ConfirmPassword, CONFIRM_PASSWORD_REQUIRED);
    } else if !data.password.is_empty() && data.password != data.confirm_password {
        errors.set(FieldName::ConfirmPassword, PASSWORDS_DO_NOT_MATCH);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data(username: &str, password: &str, confirm_password: &str) -> FormData {
        FormData {
            username: username.to_string(),
            password: password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&data("alice", "secret1", "secret1")).is_empty());
    }

    #[test]
    fn test_all_empty_reports_every_field() {
        let errors = validate(&FormData::default());
        assert_eq!(
            errors,
            FormErrors {
                username: Some(USERNAME_REQUIRED.to_string()),
                password: Some(PASSWORD_REQUIRED.to_string()),
                confirm_password: Some(CONFIRM_PASSWORD_REQUIRED.to_string()),
            }
        );
    }

    #[test]
    fn test_whitespace_username_is_required() {
        let errors = validate(&data("   \t", "pw", "pw"));
        assert_eq!(errors.get(FieldName::Username), Some(USERNAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_whitespace_password_is_not_trimmed() {
        assert!(validate(&data("alice", "  ", "  ")).is_empty());
    }

    #[test]
    fn test_mismatch_only_reports_confirm_password() {
        let pairs = [("a", "b"), ("secret", "Secret"), ("pw1", "pw12"), (" x", "x")];
        for (password, confirm) in pairs {
            let errors = validate(&data("carol", password, confirm));
            assert_eq!(
                errors,
                FormErrors {
                    confirm_password: Some(PASSWORDS_DO_NOT_MATCH.to_string()),
                    ..Default::default()
                },
                "password={password:?} confirm={confirm:?}"
            );
        }
    }

    #[test]
    fn test_missing_username_and_mismatch() {
        let errors = validate(&data("", "a", "b"));
        assert_eq!(
            errors,
            FormErrors {
                username: Some(USERNAME_REQUIRED.to_string()),
                confirm_password: Some(PASSWORDS_DO_NOT_MATCH.to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_missing_passwords() {
        let errors = validate(&data("bob", "", ""));
        assert_eq!(
            errors,
            FormErrors {
                password: Some(PASSWORD_REQUIRED.to_string()),
                confirm_password: Some(CONFIRM_PASSWORD_REQUIRED.to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_missing_password_skips_mismatch_check() {
        let errors = validate(&data("bob", "", "something"));
        assert_eq!(errors.get(FieldName::Password), Some(PASSWORD_REQUIRED));
        assert_eq!(errors.get(FieldName::ConfirmPassword), None);
    }

    #[test]
    fn test_recomputed_on_each_call() {
        let mut form = data("", "", "");
        assert_eq!(validate(&form).len(), 3);
        form.username = "dave".to_string();
        form.password = "pw".to_string();
        form.confirm_password = "pw".to_string();
        assert!(validate(&form).is_empty());
    }
}
