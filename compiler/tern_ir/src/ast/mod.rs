//! Expression and statement tree.
//!
//! Nodes are tagged enums stored flat in an [`ExprArena`](crate::ExprArena)
//! and consumed by `match`; there is no visitor trait.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind, Literal};
pub use operators::{BinaryOp, LogicalOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};
