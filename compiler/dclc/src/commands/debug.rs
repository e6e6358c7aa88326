//! Debug commands: `parse` and `lex` for inspecting the front end.

use dcl_parse::Grammar;

use super::read_file;
use crate::LoadError;

/// Parse a file and print its statements.
pub fn parse_file(path: &str) {
    let source = read_file(path);
    let parsed = dcl_lexer::lex(&source)
        .map_err(LoadError::from)
        .and_then(|tokens| Grammar::new().parse_program(&tokens).map_err(LoadError::from));

    match parsed {
        Ok(statements) => {
            println!("Parse result for '{path}' ({} statements):", statements.len());
            for statement in &statements {
                println!("{statement:#?}");
            }
        }
        Err(error) => {
            eprintln!("{}", error.render(path, &source));
            std::process::exit(error.exit_code());
        }
    }
}

/// Lex a file and print the token stream.
pub fn lex_file(path: &str) {
    let source = read_file(path);
    let tokens = match dcl_lexer::lex(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            let error = LoadError::from(error);
            eprintln!("{}", error.render(path, &source));
            std::process::exit(error.exit_code());
        }
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for token in &tokens {
        println!("  {:?} {:?} @ {}", token.kind, &*token.text, token.span);
    }
}
