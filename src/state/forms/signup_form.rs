//! Signup form controller
//!
//! Owns the field values, per-field errors and the submitting flag, and
//! drives one submission at a time through a [`SignupService`].

use super::field::{FieldName, FormData, FormErrors};
use super::validation;
use crate::state::notifications::{NotificationKind, Notifier};
use crate::submission::{SignupRequest, SignupService, SubmissionError};

/// Shown when a submission fails for any reason
pub const FAILURE_MESSAGE: &str = "An error occurred during signup. Please try again.";

/// Success text for the given username
pub fn success_message(username: &str) -> String {
    format!("Signup request submitted successfully for username: {username}")
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    /// Errors are shown until the next edit or submit
    Invalid,
    /// A request is in flight; inputs and the submit control are disabled
    Submitting,
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    data: FormData,
    errors: FormErrors,
    is_submitting: bool,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form_data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn phase(&self) -> FormPhase {
        if self.is_submitting {
            FormPhase::Submitting
        } else if !self.errors.is_empty() {
            FormPhase::Invalid
        } else {
            FormPhase::Idle
        }
    }

    /// Update a field and clear that field's error, if any.
    ///
    /// Edits are accepted while submitting; disabling input during a
    /// submission is up to the caller.
    pub fn handle_input_change(&mut self, field: FieldName, value: impl Into<String>) {
        self.data.set(field, value.into());
        if self.errors.clear(field) {
            tracing::trace!(field = %field, "cleared field error");
        }
    }

    /// Validate the current field values
    pub fn validate(&self) -> FormErrors {
        validation::validate(&self.data)
    }

    /// Validate and submit the form, notifying the outcome
    #[allow(dead_code)] // the terminal loop drives begin_submit/finish_submit itself
    pub async fn handle_submit(&mut self, service: &dyn SignupService, notifier: &mut dyn Notifier) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let outcome = service.submit(&request).await;
        self.finish_submit(&request, outcome, notifier);
    }

    /// First half of a submission.
    ///
    /// Returns the request to send when the form is valid and no submission
    /// is already running. Invalid forms keep their errors and stay idle.
    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.is_submitting {
            tracing::warn!("submit ignored: a signup request is already in flight");
            return None;
        }

        let errors = self.validate();
        if !errors.is_empty() {
            tracing::debug!(invalid_fields = errors.len(), "signup form failed validation");
            self.errors = errors;
            return None;
        }

        self.errors = FormErrors::default();
        self.is_submitting = true;

        let request = SignupRequest::from_form(&self.data);
        tracing::info!(request_id = %request.id, username = %request.username, "submitting signup request");
        Some(request)
    }

    /// Second half of a submission: report the outcome and release the
    /// submitting flag whatever happened.
    pub fn finish_submit(
        &mut self,
        request: &SignupRequest,
        outcome: Result<(), SubmissionError>,
        notifier: &mut dyn Notifier,
    ) {
        match outcome {
            Ok(()) => {
                tracing::info!(request_id = %request.id, "signup request succeeded");
                notifier.notify(
                    NotificationKind::Success,
                    success_message(&request.username),
                );
                self.reset_form();
            }
            Err(err) => {
                tracing::warn!(request_id = %request.id, error = %err, "signup request failed");
                notifier.notify(NotificationKind::Error, FAILURE_MESSAGE.to_string());
            }
        }
        self.is_submitting = false;
    }

    /// Clear all values and errors
    pub fn reset_form(&mut self) {
        self.data = FormData::default();
        self.errors = FormErrors::default();
        self.is_submitting = false;
    }
}
