//! The `repl` command: evaluate stdin line by line.
//!
//! A failing statement is reported and dropped; bindings made by earlier
//! lines survive. `:globals` lists exported names.

use std::io::{self, BufRead, Write};

use crate::{demo, Session};

const SOURCE_NAME: &str = "<repl>";

pub fn run_repl() {
    let mut session = Session::new(demo::registry());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error reading input: {e}");
                std::process::exit(1);
            }
        }

        let line = line.trim_end();
        match line.trim() {
            "" => continue,
            ":globals" => {
                for (name, value) in session.transaction().globals() {
                    println!("{name} = {}", value.to_source());
                }
                continue;
            }
            _ => {}
        }

        for result in session.interactive_line(line) {
            match result {
                Ok(value) => println!("{}", value.to_source()),
                Err(error) => eprintln!("{}", error.render(SOURCE_NAME, line)),
            }
        }
    }
}
