//! Error codes for all dcl diagnostics.

use std::fmt;

/// Error codes, grouped by phase in the first digit:
///
/// - E0xxx: lexical errors
/// - E1xxx: grammar errors
/// - E2xxx: unresolved names
/// - E3xxx: type and value errors during evaluation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,
    /// Invalid escape sequence
    E0004,

    /// No production matched (unexpected token)
    E1001,
    /// Input left over after a complete statement list
    E1002,

    /// Unknown variable name
    E2001,
    /// Unknown metaclass
    E2002,
    /// Invalid member name
    E2003,

    /// Operator not defined for the operand type
    E3001,
    /// Operand could not be converted
    E3002,
    /// No promotion applies to the operand
    E3003,
    /// Object required
    E3004,
    /// Null object dereferenced
    E3005,
    /// Duplicate dictionary key
    E3006,
    /// Property assignment outside an object literal
    E3007,
    /// Division or modulo by zero
    E3008,
    /// Integer overflow
    E3009,
    /// Property rejected the assigned value
    E3010,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            ErrorCode::E3003 => "E3003",
            ErrorCode::E3004 => "E3004",
            ErrorCode::E3005 => "E3005",
            ErrorCode::E3006 => "E3006",
            ErrorCode::E3007 => "E3007",
            ErrorCode::E3008 => "E3008",
            ErrorCode::E3009 => "E3009",
            ErrorCode::E3010 => "E3010",
        }
    }

    /// Lexical and grammar errors: the input is not well-formed dcl, as
    /// opposed to well-formed content that fails to evaluate.
    pub const fn is_syntax_error(self) -> bool {
        matches!(
            self,
            ErrorCode::E0001
                | ErrorCode::E0002
                | ErrorCode::E0003
                | ErrorCode::E0004
                | ErrorCode::E1001
                | ErrorCode::E1002
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
