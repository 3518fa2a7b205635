use super::*;
use pretty_assertions::assert_eq;
use tern_ir::{Ident, StringInterner};

#[test]
fn undefined_variable_has_correct_kind() {
    let err = undefined_variable("x");
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "x".to_string()
        }
    );
    assert_eq!(err.message, "undefined variable: x");
    assert_eq!(err.span, None);
}

#[test]
fn uninitialized_variable_is_distinct_from_undefined() {
    let uninit = uninitialized_variable("y");
    let undef = undefined_variable("y");
    assert_ne!(uninit.kind, undef.kind);
    assert_eq!(uninit.message, "variable read before assignment: y");
    assert_ne!(uninit.kind.error_code(), undef.kind.error_code());
}

#[test]
fn invalid_operand_message() {
    let err = invalid_operand("-", "a number");
    assert_eq!(err.to_string(), "operand of `-` must be a number");
    assert_eq!(err.kind.error_code(), ErrorCode::E6010);
    assert_eq!(err.kind.help(), None);
}

#[test]
fn with_span_keeps_first_location() {
    let err = undefined_variable("x")
        .with_span(Span::new(3, 4))
        .with_span(Span::new(0, 10));
    assert_eq!(err.span, Some(Span::new(3, 4)));
}

#[test]
fn scope_error_conversion_uses_name_and_span() {
    let interner = StringInterner::new();
    let ident = Ident::new(interner.intern("counter"), Span::new(12, 19));

    let undefined = ScopeError {
        kind: ScopeErrorKind::Undefined,
        ident,
    }
    .into_eval_error(&interner);
    assert_eq!(undefined.message, "undefined variable: counter");
    assert_eq!(undefined.span, Some(Span::new(12, 19)));

    let uninit = ScopeError {
        kind: ScopeErrorKind::Uninitialized,
        ident,
    }
    .into_eval_error(&interner);
    assert_eq!(
        uninit.kind,
        EvalErrorKind::UninitializedVariable {
            name: "counter".to_string()
        }
    );
}

#[test]
fn diagnostic_conversion() {
    let diag = uninitialized_variable("y")
        .with_span(Span::new(8, 9))
        .to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E6021);
    assert_eq!(diag.message, "variable read before assignment: y");
    assert_eq!(diag.label.map(|label| label.span), Some(Span::new(8, 9)));
    assert_eq!(
        diag.help.as_deref(),
        Some("assign a value to `y` before reading it")
    );
}

#[test]
fn diagnostic_without_span_has_no_label() {
    let diag = undefined_variable("z").to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E6020);
    assert_eq!(diag.label, None);
    assert!(diag.to_string().starts_with("error [E6020]: undefined variable: z"));
}
