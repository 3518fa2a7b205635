use std::fmt;

/// Error codes for runtime diagnostics.
///
/// Format: E#### where the leading digit names the phase. Only the
/// evaluator reports diagnostics today, so every code is in the E6xxx range:
/// - E6010-E6019: operand/type errors
/// - E6020-E6029: variable access errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Operator applied to an operand of the wrong type
    E6010,
    /// Variable not declared in any enclosing scope
    E6020,
    /// Variable declared but read before its first assignment
    E6021,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[ErrorCode::E6010, ErrorCode::E6020, ErrorCode::E6021];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6021 => "E6021",
        }
    }

    /// One-line explanation shown by `--explain` style tooling.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E6010 => "an operator was applied to a value of the wrong type",
            ErrorCode::E6020 => "a variable was used that is not declared in any enclosing scope",
            ErrorCode::E6021 => "a variable was read after its declaration but before any value was assigned to it",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E6020"`, ignoring case.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("E6020".parse::<ErrorCode>(), Ok(ErrorCode::E6020));
        assert_eq!("e6021".parse::<ErrorCode>(), Ok(ErrorCode::E6021));
        assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    }

    #[test]
    fn display_matches_as_str() {
        for &code in ErrorCode::ALL {
            assert_eq!(code.to_string(), code.as_str());
            assert!(code.as_str().starts_with("E6"));
            assert!(!code.description().is_empty());
        }
    }
}
