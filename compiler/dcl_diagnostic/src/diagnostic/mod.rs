//! Core diagnostic type.

use dcl_ir::Span;
use std::fmt::{self, Write as _};

use crate::span_utils::LineOffsetTable;
use crate::ErrorCode;

/// A reportable problem: what went wrong and where.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Location of the offending token or node, if known.
    pub span: Option<Span>,
    /// Secondary lines printed under the main message.
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            span: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Render as `error[code]: message at file:line:col [node text]`.
    ///
    /// The location and node text are omitted when there is no span; node
    /// text is cut at the first line break.
    pub fn render(&self, file: &str, source: &str) -> String {
        let mut out = format!("error[{}]: {}", self.code, self.message);

        if let Some(span) = self.span {
            let table = LineOffsetTable::build(source);
            let (line, col) = table.offset_to_line_col(source, span.start);
            let _ = write!(out, " at {file}:{line}:{col}");

            let text = span.slice(source).unwrap_or("");
            let text = text.lines().next().unwrap_or("").trim();
            if !text.is_empty() {
                let _ = write!(out, " [{text}]");
            }
        }

        for note in &self.notes {
            let _ = write!(out, "\n  = note: {note}");
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests;
