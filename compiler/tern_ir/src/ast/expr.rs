//! Expression nodes.

use std::fmt;

use super::operators::{BinaryOp, LogicalOp, UnaryOp};
use crate::{ExprId, Ident, Name, Span};

/// Literal values as they appear in source.
///
/// Numbers are stored as `f64` bits so the node stays `Eq + Hash`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Literal {
    Nil,
    Bool(bool),
    Number(u64),
    Str(Name),
}

impl Literal {
    #[inline]
    pub fn number(value: f64) -> Self {
        Literal::Number(value.to_bits())
    }

    /// The numeric value, if this is a number literal.
    #[inline]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Literal::Number(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }
}

/// Expression node: kind plus the source range it covers.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// The closed set of expression forms.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    /// `nil`, `true`, `1.5`, `"text"`
    Literal(Literal),

    /// Variable read: `x`
    Variable(Ident),

    /// Assignment to an existing binding: `x = value`
    Assign { target: Ident, value: ExprId },

    /// `left op right`
    Binary {
        left: ExprId,
        op: BinaryOp,
        right: ExprId,
    },

    /// `op operand`
    Unary { op: UnaryOp, operand: ExprId },

    /// `left and right`, `left or right`
    Logical {
        left: ExprId,
        op: LogicalOp,
        right: ExprId,
    },

    /// `(inner)`
    Grouping(ExprId),
}
