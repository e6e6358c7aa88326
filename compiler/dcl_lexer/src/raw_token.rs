//! Raw token definition.
//!
//! The `RawToken` enum is the logos-derived tokenizer output before it is
//! converted into `dcl_ir::Token`.

use logos::Logos;

use crate::parse_helpers::{parse_float_literal, parse_int_literal};

/// Failure inside a logos callback; `InvalidCharacter` is what logos
/// reports for input no pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RawError {
    #[default]
    InvalidCharacter,
    IntegerOutOfRange,
    InvalidFloat,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("is")]
    Is,
    #[token("export")]
    Export,

    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("..")]
    DotDot,
    #[token(".")]
    Dot,
    #[token("$")]
    Dollar,
    #[token("?")]
    Question,

    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("**")]
    Pow,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,
    #[token("<<")]
    LShift,
    #[token(">>")]
    RShift,
    #[token("&")]
    And,
    #[token("|")]
    Or,
    #[token("^")]
    Xor,
    #[token("!")]
    Not,
    #[token("~")]
    Complement,
    #[token("==")]
    Equals,
    #[token("!=")]
    NotEquals,
    #[token("=")]
    Assign,
    #[token("<=")]
    LessOrEqual,
    #[token("<")]
    Less,
    #[token(">=")]
    GreaterOrEqual,
    #[token(">")]
    Greater,

    // Hex integer
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| {
        parse_int_literal(lex.slice()).ok_or(RawError::IntegerOutOfRange)
    })]
    HexInt(i64),

    // Decimal integer
    #[regex(r"[0-9]+", |lex| {
        parse_int_literal(lex.slice()).ok_or(RawError::IntegerOutOfRange)
    })]
    Int(i64),

    // Float: fraction, exponent, or both
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| {
        parse_float_literal(lex.slice()).ok_or(RawError::InvalidFloat)
    })]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| {
        parse_float_literal(lex.slice()).ok_or(RawError::InvalidFloat)
    })]
    Float(f64),

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    // Same as above without the closing quote; only wins when that is missing
    #[regex(r#""([^"\\\n\r]|\\.)*"#)]
    UnterminatedString,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}
