//! Runtime values.

use std::fmt;

use tern_ir::{Literal, Name, StringLookup};

/// A value produced by evaluating an expression.
///
/// Strings are interned, so every variant is `Copy` and string equality is a
/// `Name` comparison.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    Str(Name),
}

impl Value {
    pub fn from_literal(lit: Literal) -> Self {
        match lit {
            Literal::Nil => Value::Nil,
            Literal::Bool(b) => Value::Bool(b),
            Literal::Number(bits) => Value::Number(f64::from_bits(bits)),
            Literal::Str(name) => Value::Str(name),
        }
    }

    /// `nil` and `false` are falsy; everything else is truthy.
    #[inline]
    pub fn is_truthy(self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }

    pub fn type_name(self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
        }
    }

    /// Render with string contents resolved through `interner`.
    pub fn display<'a, I: StringLookup + ?Sized>(self, interner: &'a I) -> DisplayValue<'a, I> {
        DisplayValue {
            value: self,
            interner,
        }
    }
}

/// [`Value`] paired with the interner needed to print strings.
pub struct DisplayValue<'a, I: ?Sized> {
    value: Value,
    interner: &'a I,
}

impl<I: StringLookup + ?Sized> fmt::Display for DisplayValue<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(name) => write!(f, "{}", self.interner.lookup(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tern_ir::StringInterner;

    #[test]
    fn truthiness() {
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(0.0).is_truthy());
        assert!(Value::Str(Name::EMPTY).is_truthy());
    }

    #[test]
    fn literals_convert() {
        let interner = StringInterner::new();
        let hi = interner.intern("hi");
        assert_eq!(Value::from_literal(Literal::number(1.5)), Value::Number(1.5));
        assert_eq!(Value::from_literal(Literal::Str(hi)), Value::Str(hi));
        assert_eq!(Value::from_literal(Literal::Nil), Value::Nil);
        assert_eq!(Value::from_literal(Literal::Bool(true)), Value::Bool(true));
    }

    #[test]
    fn display_resolves_strings() {
        let interner = StringInterner::new();
        let hi = interner.intern("hi");
        assert_eq!(Value::Str(hi).display(&interner).to_string(), "hi");
        assert_eq!(Value::Number(3.0).display(&interner).to_string(), "3");
        assert_eq!(Value::Number(0.25).display(&interner).to_string(), "0.25");
        assert_eq!(Value::Nil.display(&interner).to_string(), "nil");
        assert_eq!(Value::Bool(false).display(&interner).to_string(), "false");
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::Nil.type_name(), "nil");
        assert_eq!(Value::Number(1.0).type_name(), "number");
        assert_eq!(Value::Str(Name::EMPTY).type_name(), "string");
        assert_eq!(Value::Bool(true).type_name(), "bool");
    }
}
