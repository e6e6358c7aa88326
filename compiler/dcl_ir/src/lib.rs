//! Shared data model for the dcl description language.
//!
//! Every other `dcl_*` crate speaks in these types:
//!
//! - [`Span`]: byte range into the source text
//! - [`Token`], [`TokenKind`], [`TokenList`], [`TokenSet`]: the lexer/parser boundary
//! - [`Expr`], [`Stmt`]: the syntax tree produced by the grammar
//! - [`Atom`]: the dynamically-typed value every expression evaluates to

mod ast;
mod atom;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, ExprKind, Stmt, StmtKind, UnaryOp, VarScope};
pub use atom::{Atom, AtomType, ObjectHandle};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList, TokenSet};
