//! Parse errors.

use dcl_diagnostic::{Diagnostic, ErrorCode};
use dcl_ir::{Span, TokenKind, TokenSet};
use thiserror::Error;

use crate::Cursor;

/// No production matched.
///
/// Reported at the furthest token any production reached, with every
/// token kind that would have been accepted there.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("expected {}, found {found}", expected.format_expected())]
pub struct ParseError {
    pub code: ErrorCode,
    pub span: Span,
    pub found: TokenKind,
    pub expected: TokenSet,
}

impl ParseError {
    /// Build the error from a cursor whose top-level production failed.
    pub fn from_cursor(cursor: &Cursor<'_>) -> Self {
        let token = cursor.token_at(cursor.furthest());
        let expected = cursor.expected();
        // Accepting end of input here means every statement before this
        // token was complete.
        let code = if expected.contains(TokenKind::Eof) {
            ErrorCode::E1002
        } else {
            ErrorCode::E1001
        };
        ParseError {
            code,
            span: token.span,
            found: token.kind,
            expected,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code)
            .with_message(self.to_string())
            .with_span(self.span);
        if self.code == ErrorCode::E1002 {
            diagnostic.with_note("the statements before this token parsed; this one could not start a new statement")
        } else {
            diagnostic
        }
    }
}
