//! Reverse Polish rendering of expressions.
//!
//! Operands come first, then the operator, separated by single spaces:
//! `(1 + 2) * (1 + 2)` renders as `1 2 + 1 2 + *`. Groupings disappear since
//! postfix order already encodes precedence. Unary operators are glued to
//! their operand (`3-`, `true!`).

use std::fmt::Write;

use tern_stack::ensure_sufficient_stack;

use crate::ast::{ExprKind, Literal};
use crate::{ExprArena, ExprId, StringLookup};

/// Render `expr` in reverse Polish notation.
pub fn to_rpn<I: StringLookup + ?Sized>(arena: &ExprArena, interner: &I, expr: ExprId) -> String {
    let mut printer = RpnPrinter {
        arena,
        interner,
        out: String::new(),
    };
    printer.expr(expr);
    printer.out
}

struct RpnPrinter<'a, I: ?Sized> {
    arena: &'a ExprArena,
    interner: &'a I,
    out: String,
}

impl<I: StringLookup + ?Sized> RpnPrinter<'_, I> {
    fn expr(&mut self, id: ExprId) {
        ensure_sufficient_stack(|| match self.arena.get_expr(id).kind {
            ExprKind::Literal(lit) => self.literal(lit),
            ExprKind::Variable(ident) => self.out.push_str(self.interner.lookup(ident.name)),
            ExprKind::Assign { target, value } => {
                self.out.push_str(self.interner.lookup(target.name));
                self.out.push(' ');
                self.expr(value);
                self.out.push_str(" =");
            }
            ExprKind::Binary { left, op, right } => {
                self.postfix(left, right, op.as_symbol());
            }
            ExprKind::Logical { left, op, right } => {
                self.postfix(left, right, op.as_symbol());
            }
            ExprKind::Unary { op, operand } => {
                self.expr(operand);
                self.out.push_str(op.as_symbol());
            }
            ExprKind::Grouping(inner) => self.expr(inner),
        });
    }

    fn postfix(&mut self, left: ExprId, right: ExprId, symbol: &str) {
        self.expr(left);
        self.out.push(' ');
        self.expr(right);
        self.out.push(' ');
        self.out.push_str(symbol);
    }

    fn literal(&mut self, lit: Literal) {
        match lit {
            Literal::Nil => self.out.push_str("nil"),
            Literal::Bool(b) => self.out.push_str(if b { "true" } else { "false" }),
            Literal::Number(bits) => {
                // Writing to a String cannot fail.
                let _ = write!(self.out, "{}", f64::from_bits(bits));
            }
            Literal::Str(name) => self.out.push_str(self.interner.lookup(name)),
        }
    }
}
