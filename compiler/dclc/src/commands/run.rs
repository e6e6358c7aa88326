//! The `run` and `eval` commands.

use crate::{demo, Session};

use super::read_file;

pub fn run_file(path: &str) {
    let source = read_file(path);
    let mut session = Session::new(demo::registry());

    if let Err(error) = session.load(path, &source) {
        eprintln!("{}", error.render(path, &source));
        std::process::exit(error.exit_code());
    }

    for (name, value) in session.transaction().globals() {
        println!("{name} = {}", value.to_source());
    }
}

/// Evaluate one expression given on the command line.
pub fn eval_expression(source: &str) {
    let session = Session::new(demo::registry());
    match session.eval_expr(source) {
        Ok(value) => println!("{}", value.to_source()),
        Err(error) => {
            eprintln!("{}", error.render("<expr>", source));
            std::process::exit(error.exit_code());
        }
    }
}
