//! Form rendering module
//!
//! - `field_renderer`: memoized rendering of a single labeled input
//! - `signup_form`: the signup card with its fields and submit button

mod field_renderer;
mod signup_form;

pub use field_renderer::MemoizedField;
pub use signup_form::draw_signup_form;
