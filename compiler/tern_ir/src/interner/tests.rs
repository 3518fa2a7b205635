use super::*;
use pretty_assertions::assert_eq;

#[test]
fn intern_and_lookup() {
    let interner = StringInterner::new();

    let x = interner.intern("x");
    let y = interner.intern("y");
    let x2 = interner.intern("x");

    assert_eq!(x, x2);
    assert_ne!(x, y);
    assert_eq!(interner.lookup(x), "x");
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
    assert_eq!(interner.len(), 1);
}

#[test]
fn len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 3);
    assert!(!interner.is_empty());
}

#[test]
fn intern_owned_matches_borrowed() {
    let interner = StringInterner::new();
    let owned = interner.intern_owned(String::from("counter"));
    let borrowed = interner.intern("counter");
    assert_eq!(owned, borrowed);

    let again = interner.intern_owned(String::from("counter"));
    assert_eq!(again, borrowed);
}

#[test]
fn shared_interner_clones_share_table() {
    let interner = SharedInterner::new();
    let other = interner.clone();

    let a = interner.intern("shared");
    let b = other.intern("shared");
    assert_eq!(a, b);
    assert_eq!(StringLookup::lookup(&other, a), "shared");
}

#[test]
fn overflow_error_message() {
    let err = InternError::Overflow { count: 7 };
    assert_eq!(
        err.to_string(),
        format!("interner exceeded capacity: 7 strings, max is {}", u32::MAX)
    );
}
