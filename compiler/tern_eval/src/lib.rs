//! Tern Eval - scope chain and tree-walking evaluator.
//!
//! # Architecture
//!
//! - `ScopeChain`: arena of frames, each pointing at its enclosing frame
//! - `Environment`: a scope chain plus the frame evaluation is currently in
//! - `Interpreter`: walks the `tern_ir` arena and drives the environment
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//!
//! Variable references resolve by name at runtime, or by a precomputed
//! scope distance when one is available and the interpreter runs in
//! [`EvalMode::Resolved`].

mod environment;
pub mod errors;
mod eval_mode;
pub mod interpreter;
mod logging;
mod operators;
mod value;

pub use environment::{Binding, Environment, FrameId, ScopeChain, ScopeError, ScopeErrorKind};
pub use errors::{
    invalid_operand, undefined_variable, uninitialized_variable, EvalError, EvalErrorKind,
    EvalResult,
};
pub use eval_mode::EvalMode;
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use logging::init_tracing;
pub use operators::{evaluate_binary, evaluate_unary};
pub use value::{DisplayValue, Value};
