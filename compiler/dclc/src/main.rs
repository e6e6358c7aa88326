//! dcl command-line driver.

use dclc::commands::{eval_expression, lex_file, parse_file, run_file, run_repl};

fn main() {
    dclc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: dclc run <file.dcl>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "eval" => {
            if args.len() < 3 {
                eprintln!("Usage: dclc eval <expression>");
                std::process::exit(1);
            }
            eval_expression(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: dclc parse <file.dcl>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: dclc lex <file.dcl>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "repl" => run_repl(),
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("dclc {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            // A bare path runs the file
            if std::path::Path::new(command)
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("dcl"))
            {
                run_file(command);
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn print_usage() {
    println!("dclc - dcl description language driver");
    println!();
    println!("Usage: dclc <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file.dcl>     Load a file and print its exported globals");
    println!("  eval <expression>  Evaluate one expression and print its value");
    println!("  parse <file.dcl>   Parse and display the syntax tree");
    println!("  lex <file.dcl>     Tokenize and display tokens");
    println!("  repl               Evaluate statements from stdin");
    println!("  help               Show this help message");
    println!("  version            Show version information");
    println!();
    println!("Exit status is 2 for lexical or syntax errors, 1 for other failures.");
    println!("Set RUST_LOG (e.g. RUST_LOG=dcl_eval=debug) to enable logging.");
}
