//! Submission error types

use thiserror::Error;

/// Failure of a signup request
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The service refused the request
    #[error("signup request rejected: {0}")]
    Rejected(String),

    /// The task running the request panicked or was cancelled
    #[error("signup task did not complete: {0}")]
    Aborted(String),
}

impl From<tokio::task::JoinError> for SubmissionError {
    fn from(err: tokio::task::JoinError) -> Self {
        SubmissionError::Aborted(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = SubmissionError::Rejected("busy".to_string());
        assert_eq!(err.to_string(), "signup request rejected: busy");
    }

    #[tokio::test]
    async fn test_from_join_error() {
        let handle = tokio::spawn(async { panic!("boom") });
        let join_err = handle.await.unwrap_err();
        let err = SubmissionError::from(join_err);
        assert!(matches!(err, SubmissionError::Aborted(_)));
        assert!(err.to_string().starts_with("signup task did not complete"));
    }
}
