//! Parser for the dcl description language.
//!
//! The [`combinator`] module is a small, generic parser-combinator engine
//! over a [`Cursor`]; [`Grammar`] composes it into the dcl grammar. Build
//! the grammar once and reuse it: it holds no state between parses.
//!
//! ```ignore
//! let grammar = Grammar::new();
//! let tokens = dcl_lexer::lex("Light( intensity = 2 * 1.5 )")?;
//! let statements = grammar.parse_program(&tokens)?;
//! ```

pub mod combinator;
mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::ParseError;
pub use grammar::Grammar;
