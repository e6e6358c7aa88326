use super::*;
use pretty_assertions::assert_eq;

#[test]
fn render_with_location_and_node_text() {
    let source = "A(\n  x = speed * 2\n)";
    let start = u32::try_from(source.find("speed").unwrap_or(0)).unwrap_or(0);
    let diag = Diagnostic::error(ErrorCode::E2001)
        .with_message("unknown variable name `speed`")
        .with_span(Span::new(start, start + 9));

    assert_eq!(
        diag.render("level.dcl", source),
        "error[E2001]: unknown variable name `speed` at level.dcl:2:7 [speed * 2]"
    );
}

#[test]
fn render_without_span() {
    let diag = Diagnostic::error(ErrorCode::E3007).with_message("no object is being built");
    assert_eq!(
        diag.render("x.dcl", ""),
        "error[E3007]: no object is being built"
    );
}

#[test]
fn render_notes_and_first_line_only() {
    let source = "B(\n y = 1\n)";
    let diag = Diagnostic::error(ErrorCode::E2002)
        .with_message("unknown metaclass `B`")
        .with_span(Span::new(0, 11))
        .with_note("registered classes: A");

    assert_eq!(
        diag.render("x.dcl", source),
        "error[E2002]: unknown metaclass `B` at x.dcl:1:1 [B(]\n  = note: registered classes: A"
    );
}
