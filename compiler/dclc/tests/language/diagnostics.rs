//! Rendered diagnostics for each phase.

use pretty_assertions::assert_eq;

use crate::common::rendered_error;

#[test]
fn unknown_variable_points_at_the_reference() {
    assert_eq!(
        rendered_error("x is 1\nx + speed"),
        "error[E2001]: unknown variable name `speed` at test.dcl:2:5 [speed]"
    );
}

#[test]
fn unknown_metaclass_quotes_the_literal() {
    assert_eq!(
        rendered_error("Ghost( x = 1 )"),
        "error[E2002]: unknown metaclass `Ghost` at test.dcl:1:1 [Ghost( x = 1 )]"
    );
}

#[test]
fn forbidden_operator_quotes_the_expression() {
    assert_eq!(
        rendered_error("a is 1.0 & 2.0"),
        "error[E3001]: operator `&` is not defined for float at test.dcl:1:6 [1.0 & 2.0]"
    );
}

#[test]
fn failed_property_conversion() {
    assert_eq!(
        rendered_error("Entity(\n  health = \"full\"\n)"),
        "error[E3002]: could not convert to int at test.dcl:2:3 [health = \"full\"]"
    );
}

#[test]
fn parse_error_at_end_of_input() {
    let rendered = rendered_error("a is (1, 2");
    assert!(rendered.starts_with("error[E1001]: expected "), "{rendered}");
    assert!(rendered.ends_with(" at test.dcl:1:11"), "{rendered}");
}

#[test]
fn lex_error_quotes_the_character() {
    assert_eq!(
        rendered_error("a is @"),
        "error[E0002]: invalid character `@` at test.dcl:1:6 [@]"
    );
}
