//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{Environment, EvalMode, Value};
use tern_ir::{ExprArena, ResolvedLocals, StringInterner};

/// Builder for creating Interpreter instances.
///
/// Without [`locals`](Self::locals) every reference falls back to the
/// by-name walk, whatever the mode.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    arena: &'a ExprArena,
    locals: Option<&'a ResolvedLocals>,
    env: Option<Environment<Value>>,
    mode: EvalMode,
}

impl<'a> InterpreterBuilder<'a> {
    /// Create a new builder with default `Resolved` mode.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        Self {
            interner,
            arena,
            locals: None,
            env: None,
            mode: EvalMode::default(),
        }
    }

    /// Set the variable resolution mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Supply scope distances for variable references.
    #[must_use]
    pub fn locals(mut self, locals: &'a ResolvedLocals) -> Self {
        self.locals = Some(locals);
        self
    }

    /// Start from an existing environment instead of an empty one.
    #[must_use]
    pub fn env(mut self, env: Environment<Value>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            arena: self.arena,
            locals: self.locals,
            env: self.env.unwrap_or_default(),
            mode: self.mode,
        }
    }
}
