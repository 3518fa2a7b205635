//! Stack growth for deeply nested trees.
//!
//! The RPN printer and the evaluator both recurse once per nesting level of
//! the expression tree. A generated program with a few hundred thousand
//! nested groupings would overflow the native stack, so every recursive
//! entry point goes through [`ensure_sufficient_stack`].
//!
//! On native targets the `stacker` crate allocates a fresh segment when the
//! remaining stack drops below [`RED_ZONE`]. On wasm the closure is called
//! directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if it is close to exhausted.
///
/// ```text
/// fn print(&self, id: ExprId) -> String {
///     ensure_sufficient_stack(|| match self.arena.get_expr(id).kind {
///         ExprKind::Grouping(inner) => self.print(inner),
///         ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Wasm manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Node {
        Leaf(u64),
        Wrap(Box<Node>),
    }

    fn depth(node: &Node) -> u64 {
        ensure_sufficient_stack(|| match node {
            Node::Leaf(_) => 0,
            Node::Wrap(inner) => depth(inner) + 1,
        })
    }

    fn leaf(node: &Node) -> u64 {
        ensure_sufficient_stack(|| match node {
            Node::Leaf(v) => *v,
            Node::Wrap(inner) => leaf(inner),
        })
    }

    fn nest(levels: u64) -> Node {
        let mut node = Node::Leaf(7);
        for _ in 0..levels {
            node = Node::Wrap(Box::new(node));
        }
        node
    }

    fn unnest(mut node: Node) {
        // Drop iteratively; the default recursive drop would overflow.
        loop {
            match node {
                Node::Wrap(inner) => node = *inner,
                Node::Leaf(_) => break,
            }
        }
    }

    #[test]
    fn shallow_tree() {
        let tree = nest(10);
        assert_eq!(depth(&tree), 10);
        assert_eq!(leaf(&tree), 7);
        unnest(tree);
    }

    #[test]
    fn deep_tree_does_not_overflow() {
        let tree = nest(200_000);
        assert_eq!(depth(&tree), 200_000);
        unnest(tree);
    }

    #[test]
    fn passes_result_through() {
        let ok: Result<u8, &str> = ensure_sufficient_stack(|| Ok(3));
        assert_eq!(ok, Ok(3));
        let err: Result<u8, &str> = ensure_sufficient_stack(|| Err("boom"));
        assert_eq!(err, Err("boom"));
    }
}
