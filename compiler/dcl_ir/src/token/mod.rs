//! Tokens handed from the lexer to the parser.

mod set;

pub use set::TokenSet;

use crate::Span;
use std::fmt;
use std::sync::Arc;

/// Kind of a lexical token.
///
/// Fieldless on purpose: literal payloads live in [`Token::text`], so a
/// kind fits in one byte and doubles as a bit index for [`TokenSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    Eof,

    // Literals and names
    Int,
    Float,
    String,
    Ident,

    // Keywords
    True,
    False,
    Nil,
    Is,
    Export,

    // Delimiters
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Dot,
    DotDot,
    Dollar,
    Question,

    // Operators
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    LShift,
    RShift,
    And,
    Or,
    Xor,
    Not,
    Complement,
    Assign,
    Equals,
    NotEquals,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl TokenKind {
    /// Number of token kinds; every discriminant is below this.
    pub const COUNT: u8 = TokenKind::GreaterOrEqual as u8 + 1;

    /// Bit index of this kind inside a [`TokenSet`].
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in "expected ..." messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of file",
            TokenKind::Int => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::String => "string literal",
            TokenKind::Ident => "identifier",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Nil => "`nil`",
            TokenKind::Is => "`is`",
            TokenKind::Export => "`export`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Dot => "`.`",
            TokenKind::DotDot => "`..`",
            TokenKind::Dollar => "`$`",
            TokenKind::Question => "`?`",
            TokenKind::Add => "`+`",
            TokenKind::Sub => "`-`",
            TokenKind::Mul => "`*`",
            TokenKind::Div => "`/`",
            TokenKind::Mod => "`%`",
            TokenKind::Pow => "`**`",
            TokenKind::LShift => "`<<`",
            TokenKind::RShift => "`>>`",
            TokenKind::And => "`&`",
            TokenKind::Or => "`|`",
            TokenKind::Xor => "`^`",
            TokenKind::Not => "`!`",
            TokenKind::Complement => "`~`",
            TokenKind::Assign => "`=`",
            TokenKind::Equals => "`==`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Less => "`<`",
            TokenKind::LessOrEqual => "`<=`",
            TokenKind::Greater => "`>`",
            TokenKind::GreaterOrEqual => "`>=`",
        }
    }

    /// All kinds, in discriminant order.
    pub const ALL: [TokenKind; TokenKind::COUNT as usize] = [
        TokenKind::Eof,
        TokenKind::Int,
        TokenKind::Float,
        TokenKind::String,
        TokenKind::Ident,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Nil,
        TokenKind::Is,
        TokenKind::Export,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Dot,
        TokenKind::DotDot,
        TokenKind::Dollar,
        TokenKind::Question,
        TokenKind::Add,
        TokenKind::Sub,
        TokenKind::Mul,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Pow,
        TokenKind::LShift,
        TokenKind::RShift,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Not,
        TokenKind::Complement,
        TokenKind::Assign,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessOrEqual,
        TokenKind::Greater,
        TokenKind::GreaterOrEqual,
    ];
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A token: kind, text and location.
///
/// `text` is the source slice for names, numbers and punctuation, and the
/// unescaped contents for string literals. It is reference-counted so the
/// parser can hand tokens to reductions without copying the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Arc<str>,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Arc<str>>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// End-of-input marker at `offset`.
    pub fn eof(offset: u32) -> Self {
        Token::new(TokenKind::Eof, "", Span::point(offset))
    }
}

/// Immutable token stream produced by the lexer.
///
/// Invariant: non-empty, and the last token is always `Eof`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    /// Build a list from lexed tokens, appending the `Eof` terminator.
    pub fn new(mut tokens: Vec<Token>, source_len: u32) -> Self {
        tokens.push(Token::eof(source_len));
        TokenList { tokens }
    }

    /// Number of tokens, including the trailing `Eof`.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always `false`: the list contains at least `Eof`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The trailing `Eof` token.
    #[inline]
    pub fn eof(&self) -> &Token {
        &self.tokens[self.tokens.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl std::ops::Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
