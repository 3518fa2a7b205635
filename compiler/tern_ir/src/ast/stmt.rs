//! Statement nodes.

use crate::{ExprId, Ident, Span, StmtRange};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// Expression evaluated for its effect: `x = 1;`
    Expression(ExprId),

    /// `var name;` or `var name = init;`
    Var { name: Ident, init: Option<ExprId> },

    /// `{ ... }`, runs its statements in a fresh scope.
    Block(StmtRange),
}
