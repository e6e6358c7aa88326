//! The `dclc` binary, driven as a subprocess.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

fn dclc(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dclc"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start dclc");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("failed to write stdin");
    child.wait_with_output().expect("dclc did not finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn run_prints_exported_globals() {
    let output = dclc(&["run", &fixture("scene.dcl")], "");
    assert!(output.status.success(), "{}", stderr(&output));

    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "gravity = -9.81",
            "hero = <object #0>",
            "palette = {(\"warm\", 16755251), (\"cold\", 3377407)}",
            "spawn = (4.0, 2.5)",
            "sun = <object #2>",
        ]
    );
}

#[test]
fn run_reports_the_first_error_and_fails() {
    let path = fixture("broken.dcl");
    let output = dclc(&["run", &path], "");
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim_end(),
        format!("error[E2001]: unknown variable name `brightness` at {path}:3:17 [brightness]")
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn repl_keeps_going_after_an_error() {
    let output = dclc(&["repl"], "x is 2\nx * y\nexport y is x + 1\nx * y\n:globals\n");
    assert!(output.status.success());

    let stdout = stdout(&output).replace("> ", "");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["2", "3", "6", "y = 3"]);
    assert_eq!(
        stderr(&output).trim_end(),
        "error[E2001]: unknown variable name `y` at <repl>:1:5 [y]"
    );
}

#[test]
fn lex_lists_tokens() {
    let output = dclc(&["lex", &fixture("broken.dcl")], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("Ident \"brightness\""));
}

#[test]
fn missing_file_is_reported() {
    let output = dclc(&["run", "no/such/file.dcl"], "");
    assert!(!output.status.success());
    assert_eq!(
        stderr(&output).trim_end(),
        "cannot find file 'no/such/file.dcl'"
    );
}

#[test]
fn exit_status_distinguishes_syntax_errors() {
    let path = fixture("syntax.dcl");
    let output = dclc(&["run", &path], "");
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("error[E1001]: "));

    assert_eq!(dclc(&["parse", &path], "").status.code(), Some(2));
    assert_eq!(dclc(&["run", &fixture("broken.dcl")], "").status.code(), Some(1));
}

#[test]
fn eval_prints_one_value() {
    let output = dclc(&["eval", "2 ** (0 - 1)"], "");
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "0\n");

    let output = dclc(&["eval", "2 ** -1"], "");
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
}
