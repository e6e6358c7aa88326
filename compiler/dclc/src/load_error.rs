//! The error a content load stops at, from whichever phase raised it.

use dcl_diagnostic::Diagnostic;
use dcl_eval::EvalError;
use dcl_lexer::LexError;
use dcl_parse::ParseError;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl LoadError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LoadError::Lex(error) => error.to_diagnostic(),
            LoadError::Parse(error) => error.to_diagnostic(),
            LoadError::Eval(error) => error.to_diagnostic(),
        }
    }

    /// Process exit status for a command that stopped at this error:
    /// 2 when the input never got past the front end, 1 when it failed
    /// while running.
    pub fn exit_code(&self) -> i32 {
        if self.to_diagnostic().code.is_syntax_error() {
            2
        } else {
            1
        }
    }

    /// Render against the source it was raised for.
    pub fn render(&self, file: &str, source: &str) -> String {
        self.to_diagnostic().render(file, source)
    }
}
