//! Token cursor for the combinator engine.
//!
//! The cursor is a position into an immutable [`TokenList`], so saving and
//! restoring it is copying an index. It also remembers the furthest
//! position any production failed at, together with the token kinds that
//! would have been accepted there; the parse entry points turn that into
//! the "expected one of" diagnostic.

use dcl_ir::{Token, TokenKind, TokenList, TokenSet};
use tracing::trace;

pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
    furthest: usize,
    expected: TokenSet,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor {
            tokens,
            pos: 0,
            furthest: 0,
            expected: TokenSet::new(),
        }
    }

    /// Current position; pass it to [`Cursor::set_position`] to roll back.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Roll back (or forward) to a position previously returned by
    /// [`Cursor::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        if pos != self.pos {
            trace!(from = self.pos, to = pos, "cursor rollback");
        }
        self.pos = pos;
    }

    /// The next token, without consuming it.
    ///
    /// Invariant: the position is always valid and the last token is `Eof`.
    #[inline]
    pub fn peek(&self) -> &'a Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Consume and return the next token. `Eof` is never consumed.
    pub fn read(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// Token at an absolute position, clamped to `Eof`.
    pub fn token_at(&self, pos: usize) -> &'a Token {
        self.tokens.get(pos).unwrap_or_else(|| self.tokens.eof())
    }

    /// Record that the token at the current position did not match any
    /// of `expected`.
    pub fn note_failure(&mut self, expected: TokenSet) {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected = expected;
        } else if self.pos == self.furthest {
            self.expected.union_with(expected);
        }
    }

    /// Furthest position any match was attempted and failed at.
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    /// Token kinds that would have been accepted at [`Cursor::furthest`].
    pub fn expected(&self) -> TokenSet {
        self.expected
    }
}
