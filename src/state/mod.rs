//! Application state module

mod forms;
mod notifications;

pub use forms::*;
pub use notifications::*;
