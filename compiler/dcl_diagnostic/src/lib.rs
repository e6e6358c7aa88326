//! Diagnostics for the dcl toolchain.
//!
//! Each phase (lexer, parser, evaluator) keeps its own error type and
//! converts it into a [`Diagnostic`]: an [`ErrorCode`], a message and a
//! primary span. Rendering resolves the span to `file:line:col` and quotes
//! the offending source text:
//!
//! ```text
//! error[E2001]: unknown variable name `speed` at level.dcl:4:13 [speed * 2]
//! ```

mod diagnostic;
mod error_code;
pub mod span_utils;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
