//! Scope distances computed ahead of evaluation.

use rustc_hash::FxHashMap;

use crate::ExprId;

/// Side table from variable-reference expressions to scope distance.
///
/// A distance of `n` means the binding lives `n` parent hops above the
/// frame that is current when the expression is evaluated. Expressions with
/// no entry fall back to a by-name walk of the scope chain.
///
/// The table is only valid for a scope chain whose runtime nesting mirrors
/// the lexical nesting the resolver assumed.
#[derive(Clone, Default, Debug)]
pub struct ResolvedLocals {
    depths: FxHashMap<ExprId, u32>,
}

impl ResolvedLocals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance for a `Variable` or `Assign` expression.
    pub fn insert(&mut self, expr: ExprId, depth: u32) {
        self.depths.insert(expr, depth);
    }

    #[inline]
    pub fn get(&self, expr: ExprId) -> Option<u32> {
        self.depths.get(&expr).copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unresolved_expressions_have_no_depth() {
        let mut locals = ResolvedLocals::new();
        assert!(locals.is_empty());

        locals.insert(ExprId::new(3), 0);
        locals.insert(ExprId::new(7), 2);

        assert_eq!(locals.get(ExprId::new(3)), Some(0));
        assert_eq!(locals.get(ExprId::new(7)), Some(2));
        assert_eq!(locals.get(ExprId::new(5)), None);
        assert_eq!(locals.len(), 2);
    }

    #[test]
    fn later_insert_wins() {
        let mut locals = ResolvedLocals::new();
        locals.insert(ExprId::new(1), 4);
        locals.insert(ExprId::new(1), 1);
        assert_eq!(locals.get(ExprId::new(1)), Some(1));
    }
}
