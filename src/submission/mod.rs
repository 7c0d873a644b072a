//! Signup request submission
//!
//! The form controller only talks to [`SignupService`]; the shipped
//! implementation simulates the request in-process.

mod error;
mod simulated;
mod traits;

pub use error::SubmissionError;
pub use simulated::SimulatedSignupService;
pub use traits::{SignupRequest, SignupService};

#[cfg(test)]
pub use traits::MockSignupService;
