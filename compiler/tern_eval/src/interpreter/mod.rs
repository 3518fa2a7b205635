//! Tree-walking interpreter over the expression arena.
//!
//! The interpreter owns an [`Environment`] and drives it the way blocks and
//! variable references demand: a block pushes a scope for its statements,
//! `var` declares into the current scope, and references either jump to a
//! precomputed distance or walk the chain by name (see [`EvalMode`]).

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use tern_ir::{
    ExprArena, ExprId, ExprKind, Ident, LogicalOp, ResolvedLocals, StmtId, StmtKind, StmtRange,
    StringInterner,
};
use tern_stack::ensure_sufficient_stack;

use crate::operators::{evaluate_binary, evaluate_unary};
use crate::{Environment, EvalError, EvalMode, EvalResult, Value};

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    /// String interner for names and string values.
    pub(crate) interner: &'a StringInterner,
    /// Expression and statement storage.
    pub(crate) arena: &'a ExprArena,
    /// Scope distances keyed by the referencing expression.
    pub(crate) locals: Option<&'a ResolvedLocals>,
    /// Current environment.
    pub(crate) env: Environment<Value>,
    pub(crate) mode: EvalMode,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter with an empty global scope and no distances.
    pub fn new(interner: &'a StringInterner, arena: &'a ExprArena) -> Self {
        InterpreterBuilder::new(interner, arena).build()
    }

    #[inline]
    pub fn env(&self) -> &Environment<Value> {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment<Value> {
        &mut self.env
    }

    /// Run a sequence of statements in the current scope.
    ///
    /// Stops at the first error.
    pub fn interpret(&mut self, stmts: &[StmtId]) -> Result<(), EvalError> {
        for &stmt in stmts {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Execute one statement.
    pub fn execute(&mut self, id: StmtId) -> Result<(), EvalError> {
        ensure_sufficient_stack(|| self.execute_inner(id))
    }

    fn execute_inner(&mut self, id: StmtId) -> Result<(), EvalError> {
        let stmt = *self.arena.get_stmt(id);
        match stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
            }
            StmtKind::Var { name, init: None } => self.env.declare(name.name),
            StmtKind::Var {
                name,
                init: Some(init),
            } => {
                // The initializer sees the scope as it was before the declaration.
                let value = self.evaluate(init)?;
                self.env.define(name.name, value);
            }
            StmtKind::Block(range) => self.execute_block(range)?,
        }
        Ok(())
    }

    fn execute_block(&mut self, range: StmtRange) -> Result<(), EvalError> {
        let arena = self.arena;
        let stmts = arena.get_stmt_list(range);
        let _span = tracing::debug_span!("block", statements = stmts.len()).entered();
        self.with_env_scope(|scoped| scoped.interpret(stmts))
    }

    /// Evaluate an expression to a value.
    pub fn evaluate(&mut self, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(id))
    }

    fn eval_inner(&mut self, id: ExprId) -> EvalResult {
        let expr = *self.arena.get_expr(id);
        match expr.kind {
            ExprKind::Literal(lit) => Ok(Value::from_literal(lit)),
            ExprKind::Variable(ident) => self.lookup_variable(id, &ident),
            ExprKind::Assign { target, value } => {
                let value = self.evaluate(value)?;
                self.assign_variable(id, &target, value)?;
                Ok(value)
            }
            ExprKind::Binary { left, op, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, op, right, self.interner).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.evaluate(operand)?;
                evaluate_unary(op, operand).map_err(|e| e.with_span(expr.span))
            }
            ExprKind::Logical { left, op, right } => {
                let left = self.evaluate(left)?;
                match op {
                    LogicalOp::Or if left.is_truthy() => Ok(left),
                    LogicalOp::And if !left.is_truthy() => Ok(left),
                    LogicalOp::And | LogicalOp::Or => self.evaluate(right),
                }
            }
            ExprKind::Grouping(inner) => self.evaluate(inner),
        }
    }

    /// Distance to use for the reference at `id`, if any.
    fn distance(&self, id: ExprId) -> Option<u32> {
        if self.mode.uses_distances() {
            self.locals.and_then(|locals| locals.get(id))
        } else {
            None
        }
    }

    fn lookup_variable(&self, id: ExprId, ident: &Ident) -> EvalResult {
        let found = match self.distance(id) {
            Some(distance) => self.env.lookup_at(distance, ident),
            None => self.env.lookup(ident),
        };
        found.copied().map_err(|e| e.into_eval_error(self.interner))
    }

    fn assign_variable(&mut self, id: ExprId, ident: &Ident, value: Value) -> Result<(), EvalError> {
        match self.distance(id) {
            Some(distance) => {
                self.env.assign_at(distance, ident, value);
                Ok(())
            }
            None => self
                .env
                .assign(ident, value)
                .map_err(|e| e.into_eval_error(self.interner)),
        }
    }
}
