//! How the interpreter resolves variable references.

/// Variable resolution policy.
///
/// `Resolved` trusts the scope distances computed ahead of evaluation and
/// jumps straight to the declaring frame. `Dynamic` ignores them and walks
/// the chain by name on every access.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Use `lookup_at`/`assign_at` for references with a known distance.
    #[default]
    Resolved,
    /// Always walk the chain by name.
    Dynamic,
}

impl EvalMode {
    /// Whether precomputed distances are consulted.
    #[inline]
    pub fn uses_distances(self) -> bool {
        matches!(self, Self::Resolved)
    }
}
