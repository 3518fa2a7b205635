//! Identifier occurrences.

use crate::{Name, Span};

/// One occurrence of an identifier in the source.
///
/// Scope lookups key on `name`; `span` is only read when a lookup fails and
/// the error has to point somewhere.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

impl Ident {
    #[inline]
    pub const fn new(name: Name, span: Span) -> Self {
        Ident { name, span }
    }

    /// Identifier with no source location.
    #[inline]
    pub const fn synthetic(name: Name) -> Self {
        Ident {
            name,
            span: Span::DUMMY,
        }
    }
}
