//! Tokenizer for dcl source text.
//!
//! Produces the [`TokenList`] the parser walks. Whitespace and `//`
//! comments are dropped; the list always ends with `Eof`. The first
//! malformed token aborts lexing with a [`LexError`].

mod lex_error;
mod parse_helpers;
mod raw_token;

pub use lex_error::{LexError, LexErrorKind};
pub use parse_helpers::{parse_float_literal, parse_int_literal};

use dcl_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::trace;

use parse_helpers::unescape;
use raw_token::{RawError, RawToken};

/// Lex `source` into a token list.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let source_len = u32::try_from(source.len()).unwrap_or(u32::MAX);
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let span = Span::try_from_range(range.clone())
            .unwrap_or_else(|_| Span::point(source_len));
        let slice = logos.slice();

        let raw = result.map_err(|error| lex_error(error, slice, span))?;
        if let Some(token) = convert_token(raw, slice, span)? {
            tokens.push(token);
        }
    }

    trace!(count = tokens.len(), "lexed source");
    Ok(TokenList::new(tokens, source_len))
}

fn lex_error(error: RawError, slice: &str, span: Span) -> LexError {
    let kind = match error {
        RawError::InvalidCharacter => LexErrorKind::InvalidCharacter(slice.to_string()),
        RawError::IntegerOutOfRange => LexErrorKind::IntegerOutOfRange(slice.to_string()),
        RawError::InvalidFloat => LexErrorKind::InvalidFloat(slice.to_string()),
    };
    LexError::new(kind, span)
}

/// Convert a raw token; `Ok(None)` for trivia.
fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<Option<Token>, LexError> {
    let kind = match raw {
        RawToken::LineComment => return Ok(None),
        RawToken::UnterminatedString => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, span));
        }
        RawToken::String => {
            let body = &slice[1..slice.len() - 1];
            let text = unescape(body).map_err(|offset| {
                // +1 skips the opening quote
                let start = span.start + u32::try_from(offset + 1).unwrap_or(0);
                LexError::new(LexErrorKind::InvalidEscape, Span::new(start, start + 2))
            })?;
            return Ok(Some(Token::new(TokenKind::String, text, span)));
        }
        RawToken::Int(_) | RawToken::HexInt(_) => TokenKind::Int,
        RawToken::Float(_) => TokenKind::Float,
        RawToken::Ident => TokenKind::Ident,
        RawToken::Nil => TokenKind::Nil,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Is => TokenKind::Is,
        RawToken::Export => TokenKind::Export,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::DotDot => TokenKind::DotDot,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Dollar => TokenKind::Dollar,
        RawToken::Question => TokenKind::Question,
        RawToken::Add => TokenKind::Add,
        RawToken::Sub => TokenKind::Sub,
        RawToken::Pow => TokenKind::Pow,
        RawToken::Mul => TokenKind::Mul,
        RawToken::Div => TokenKind::Div,
        RawToken::Mod => TokenKind::Mod,
        RawToken::LShift => TokenKind::LShift,
        RawToken::RShift => TokenKind::RShift,
        RawToken::And => TokenKind::And,
        RawToken::Or => TokenKind::Or,
        RawToken::Xor => TokenKind::Xor,
        RawToken::Not => TokenKind::Not,
        RawToken::Complement => TokenKind::Complement,
        RawToken::Equals => TokenKind::Equals,
        RawToken::NotEquals => TokenKind::NotEquals,
        RawToken::Assign => TokenKind::Assign,
        RawToken::LessOrEqual => TokenKind::LessOrEqual,
        RawToken::Less => TokenKind::Less,
        RawToken::GreaterOrEqual => TokenKind::GreaterOrEqual,
        RawToken::Greater => TokenKind::Greater,
    };
    Ok(Some(Token::new(kind, slice, span)))
}
