//! Lexical errors.

use dcl_diagnostic::{Diagnostic, ErrorCode};
use dcl_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid character `{0}`")]
    InvalidCharacter(String),
    #[error("integer literal `{0}` does not fit in 64 bits")]
    IntegerOutOfRange(String),
    #[error("invalid float literal `{0}`")]
    InvalidFloat(String),
    #[error("invalid escape sequence in string literal")]
    InvalidEscape,
}

/// A malformed token and where it starts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidCharacter(_) => ErrorCode::E0002,
            LexErrorKind::IntegerOutOfRange(_) | LexErrorKind::InvalidFloat(_) => ErrorCode::E0003,
            LexErrorKind::InvalidEscape => ErrorCode::E0004,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_span(self.span)
    }
}
