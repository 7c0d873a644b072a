//! Form domain layer
//!
//! Field values, validation and the signup form controller. Nothing here
//! knows about the terminal.

mod field;
mod signup_form;
mod validation;

pub use field::{FieldName, FormData, InputType};
pub use signup_form::{FormPhase, SignupForm};
#[cfg(test)]
pub use signup_form::{success_message, FAILURE_MESSAGE};
