//! Tern IR - names, spans and the expression tree.
//!
//! This crate holds the data the evaluator consumes but never mutates:
//! - `Name`/`StringInterner` for interned identifiers
//! - `Span` and `Ident` for source locations in error reports
//! - `ExprArena` with flat `Expr`/`Stmt` nodes addressed by id
//! - `ResolvedLocals`, the scope distances produced before evaluation
//! - `to_rpn`, a postfix printer for expressions
//!
//! # Design
//!
//! - **Intern everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten everything**: no `Box<Expr>`, children are `ExprId` indices
//! - **Closed node set**: tagged enums matched exhaustively, no visitors

mod arena;
pub mod ast;
mod expr_id;
mod ident;
mod interner;
mod locals;
mod name;
pub mod rpn;
mod span;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Literal, LogicalOp, Stmt, StmtKind, UnaryOp};
pub use expr_id::{ExprId, StmtId, StmtRange};
pub use ident::Ident;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use locals::ResolvedLocals;
pub use name::Name;
pub use rpn::to_rpn;
pub use span::{Span, SpanError};
