//! Runtime errors raised while evaluating.
//!
//! `EvalErrorKind` is the structured category; factory functions build an
//! `EvalError` with the matching message so call sites never format error
//! text themselves. Every kind maps to an E6xxx [`ErrorCode`] for
//! diagnostics.

use std::fmt;

use tern_diagnostic::{Diagnostic, ErrorCode};
use tern_ir::{Span, StringLookup};

use crate::environment::{ScopeError, ScopeErrorKind};
use crate::Value;

/// Result of evaluating an expression.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// No enclosing scope declares the name.
    UndefinedVariable { name: String },
    /// The name is declared but has not been assigned yet.
    UninitializedVariable { name: String },
    /// An operator got an operand of the wrong type.
    InvalidOperand {
        op: &'static str,
        expected: &'static str,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "undefined variable: {name}"),
            Self::UninitializedVariable { name } => {
                write!(f, "variable read before assignment: {name}")
            }
            Self::InvalidOperand { op, expected } => {
                write!(f, "operand of `{op}` must be {expected}")
            }
        }
    }
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidOperand { .. } => ErrorCode::E6010,
            Self::UndefinedVariable { .. } => ErrorCode::E6020,
            Self::UninitializedVariable { .. } => ErrorCode::E6021,
        }
    }

    /// Short label for the primary span.
    pub fn primary_label(&self) -> &'static str {
        match self {
            Self::UndefinedVariable { .. } => "not found in this scope",
            Self::UninitializedVariable { .. } => "read before any value was assigned",
            Self::InvalidOperand { .. } => "wrong operand type",
        }
    }

    /// Fix hint, when there is an obvious one.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::UndefinedVariable { name } => {
                Some(format!("declare `{name}` with `var {name} = ...` before using it"))
            }
            Self::UninitializedVariable { name } => {
                Some(format!("assign a value to `{name}` before reading it"))
            }
            Self::InvalidOperand { .. } => None,
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Where the error happened, when known.
    pub span: Option<Span>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span: None,
        }
    }

    /// Attach a source location, keeping an existing one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    /// Convert into a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code(), self.message.clone());
        if let Some(span) = self.span {
            diag = diag.with_label(span, self.kind.primary_label());
        }
        if let Some(help) = self.kind.help() {
            diag = diag.with_help(help);
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

/// Undefined variable.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

/// Variable read before its first assignment.
#[cold]
pub fn uninitialized_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UninitializedVariable {
        name: name.to_string(),
    })
}

/// Operator applied to the wrong operand type.
#[cold]
pub fn invalid_operand(op: &'static str, expected: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidOperand { op, expected })
}

impl ScopeError {
    /// Spell out the name and attach the identifier's span.
    pub fn into_eval_error<I: StringLookup + ?Sized>(self, interner: &I) -> EvalError {
        let name = interner.lookup(self.ident.name);
        let err = match self.kind {
            ScopeErrorKind::Undefined => undefined_variable(name),
            ScopeErrorKind::Uninitialized => uninitialized_variable(name),
        };
        err.with_span(self.ident.span)
    }
}

#[cfg(test)]
mod tests;
