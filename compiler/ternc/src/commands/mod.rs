//! Driver commands.

mod explain;
mod rpn;
mod scopes;

pub use explain::{explain, explain_error};
pub use rpn::{grouped_sum_rpn, print_rpn};
pub use scopes::{run_scopes, scope_report, SCOPE_SOURCE};
