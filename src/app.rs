//! Application state and core logic

use crate::state::{FieldName, NotificationQueue, SignupForm};
use crate::submission::{SignupRequest, SignupService, SubmissionError};
use crate::ui::MemoizedField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Field(FieldName::Username) => Focus::Field(FieldName::Password),
            Focus::Field(FieldName::Password) => Focus::Field(FieldName::ConfirmPassword),
            Focus::Field(FieldName::ConfirmPassword) => Focus::SubmitButton,
            Focus::SubmitButton => Focus::Field(FieldName::Username),
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Field(FieldName::Username) => Focus::SubmitButton,
            Focus::Field(FieldName::Password) => Focus::Field(FieldName::Username),
            Focus::Field(FieldName::ConfirmPassword) => Focus::Field(FieldName::Password),
            Focus::SubmitButton => Focus::Field(FieldName::ConfirmPassword),
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::Username)
    }
}

/// A signup request running on a background task
struct PendingSubmission {
    request: SignupRequest,
    handle: JoinHandle<Result<(), SubmissionError>>,
}

/// Main application struct
pub struct App {
    /// Signup form controller
    pub form: SignupForm,
    pub focus: Focus,
    /// Modal notifications waiting to be dismissed
    pub notifications: NotificationQueue,
    /// One memoized renderer per field, in `FieldName::ALL` order
    pub fields: [MemoizedField; 3],
    service: Arc<dyn SignupService>,
    pending: Option<PendingSubmission>,
    quit: bool,
}

impl App {
    pub fn new(service: Arc<dyn SignupService>) -> Self {
        Self {
            form: SignupForm::new(),
            focus: Focus::default(),
            notifications: NotificationQueue::default(),
            fields: Default::default(),
            service,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Notification dialog is modal
        if self.notifications.is_active() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notifications.dismiss();
            }
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            _ => {}
        }

        // Inputs and the submit button are disabled while a request is in flight
        if self.form.is_submitting() {
            return;
        }

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if key.modifiers.contains(crate::platform::COMMAND_MODIFIER) => {
                self.form.reset_form();
                self.focus = Focus::default();
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                Focus::Field(_) => self.focus = self.focus.next(),
                Focus::SubmitButton => self.submit(),
            },
            KeyCode::Char(c)
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                self.edit_focused(|value| value.push(c));
            }
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
            }
            _ => {}
        }
    }

    /// Apply an edit to the focused field's value
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        if let Focus::Field(field) = self.focus {
            let mut value = self.form.form_data().get(field).to_string();
            edit(&mut value);
            self.form.handle_input_change(field, value);
        }
    }

    /// Validate the form and, when valid, start the signup request on a
    /// background task so the UI keeps drawing while it runs
    fn submit(&mut self) {
        let Some(request) = self.form.begin_submit() else {
            // Jump to the first field that needs attention
            if let Some((field, _)) = self.form.errors().iter().next() {
                self.focus = Focus::Field(field);
            }
            return;
        };

        let service = Arc::clone(&self.service);
        let task_request = request.clone();
        let handle = tokio::spawn(async move { service.submit(&task_request).await });
        self.pending = Some(PendingSubmission { request, handle });
    }

    /// Whether a signup request is running in the background
    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    /// Finish the in-flight submission if its task is done
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.handle.is_finished());
        if finished {
            self.complete_submission().await;
        }
    }

    /// Wait for the in-flight submission and report its outcome
    pub async fn complete_submission(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        // A panicked or cancelled task counts as a failed request
        let outcome = pending
            .handle
            .await
            .unwrap_or_else(|err| Err(SubmissionError::from(err)));
        self.form
            .finish_submit(&pending.request, outcome, &mut self.notifications);
    }
}
