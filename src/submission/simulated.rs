//! In-process signup service that stands in for a network call

use super::{SignupRequest, SignupService, SubmissionError};
use async_trait::async_trait;
use std::time::Duration;

/// Default simulated round-trip time
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Waits a fixed delay, then succeeds (or fails when fault injection is on)
#[derive(Debug, Clone)]
pub struct SimulatedSignupService {
    delay: Duration,
    fail: bool,
}

impl SimulatedSignupService {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Make every request fail after the delay
    pub fn failing(mut self, fail: bool) -> Self {
        self.fail = fail;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSignupService {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl SignupService for SimulatedSignupService {
    async fn submit(&self, request: &SignupRequest) -> Result<(), SubmissionError> {
        tracing::debug!(request_id = %request.id, delay_ms = self.delay.as_millis() as u64, "simulating signup request");
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SubmissionError::Rejected("simulated failure".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormData;
    use tokio::time::Instant;

    fn request() -> SignupRequest {
        SignupRequest::from_form(&FormData {
            username: "alice".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
        })
    }

    #[test]
    fn test_default_delay_is_one_second() {
        assert_eq!(SimulatedSignupService::default().delay(), Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay_then_succeeds() {
        let service = SimulatedSignupService::default();
        let start = Instant::now();
        let result = service.submit(&request()).await;
        assert!(result.is_ok());
        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_service_rejects() {
        let service = SimulatedSignupService::new(Duration::from_millis(10)).failing(true);
        let result = service.submit(&request()).await;
        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
    }

    #[test]
    fn test_zero_delay_with_block_on() {
        let service = SimulatedSignupService::new(Duration::ZERO);
        let result = tokio_test::block_on(service.submit(&request()));
        assert!(result.is_ok());
    }
}
