//! Command handlers for the `dclc` binary.
//!
//! Each handler reports to stdout/stderr and exits the process with a
//! non-zero status on failure: 2 for lexical and syntax errors, 1 for
//! anything else.

mod debug;
mod repl;
mod run;

pub use debug::{lex_file, parse_file};
pub use repl::run_repl;
pub use run::{eval_expression, run_file};

/// Read a source file or exit with a readable message.
pub(crate) fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("{}", describe_read_error(path, &e));
        std::process::exit(1);
    })
}

fn describe_read_error(path: &str, error: &std::io::Error) -> String {
    match error.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' is not valid UTF-8"),
        _ => format!("error reading '{path}': {error}"),
    }
}
