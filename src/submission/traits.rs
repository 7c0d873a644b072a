//! Trait abstraction for the signup service to enable mocking in tests

use super::SubmissionError;
use crate::state::FormData;
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

/// Snapshot of a validated form, handed to the signup service
#[derive(Clone, PartialEq, Eq)]
pub struct SignupRequest {
    /// Correlates log lines of one submission
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

impl SignupRequest {
    pub fn from_form(data: &FormData) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: data.username.clone(),
            password: data.password.clone(),
        }
    }
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Trait for signup submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Submit a signup request
    async fn submit(&self, request: &SignupRequest) -> Result<(), SubmissionError>;
}
