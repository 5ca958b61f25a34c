use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: Lexical errors
/// - E1xxx: Syntax errors
/// - E2xxx: Type errors (including undefined variables)
/// - E6xxx: Evaluation errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexical Errors (E0xxx)
    /// Invalid character in input
    E0001,
    /// Unterminated string literal
    E0002,
    /// Integer literal out of range
    E0003,

    // Syntax Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected `)`
    E1002,
    /// Expected `:` in conditional
    E1003,
    /// Trailing input after expression
    E1004,
    /// Invalid format specifier
    E1005,

    // Type Errors (E2xxx)
    /// Operand type mismatch
    E2001,
    /// Operand type not allowed for operator
    E2002,
    /// Undefined variable
    E2003,
    /// Reserved identifier used as assignment target
    E2004,

    // Evaluation Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Modulo by zero
    E6002,

    // Internal Errors (E9xxx)
    /// Internal interpreter error
    E9001,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E9001 => "E9001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
