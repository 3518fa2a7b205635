//! Error reports for the Tern evaluator.
//!
//! A diagnostic carries an error code for searchability, a message saying
//! what went wrong, an optional label saying where, and an optional hint
//! saying how to fix it.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
