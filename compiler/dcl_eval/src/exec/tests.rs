use super::*;
use crate::errors::{EvalError, EvalErrorKind};
use crate::reflect::{ClassDef, Registry};
use crate::Transaction;
use dcl_ir::{AtomType, ObjectHandle, Span};
use dcl_parse::Grammar;
use pretty_assertions::assert_eq;

fn registry() -> Registry {
    Registry::new()
        .with_class(
            ClassDef::new("A")
                .property("x", AtomType::Int, 0_i64)
                .property("z", AtomType::Int, 0_i64)
                .property("child", AtomType::Object, Atom::NIL),
        )
        .with_class(ClassDef::new("B").property("y", AtomType::Int, 0_i64))
        .with_class(
            ClassDef::new("Light")
                .property("intensity", AtomType::Float, 1.0)
                .property("label", AtomType::Str, "")
                .property("on", AtomType::Bool, false),
        )
}

fn statements(source: &str) -> Vec<Stmt> {
    let tokens = dcl_lexer::lex(source).unwrap_or_else(|e| panic!("lex failed: {e}"));
    Grammar::new()
        .parse_program(&tokens)
        .unwrap_or_else(|e| panic!("parse failed for {source:?}: {e}"))
}

/// Execute every statement, returning the last value.
fn run_in(transaction: &Transaction, source: &str) -> EvalResult {
    let mut ctx = ParseContext::new(transaction);
    let mut last = Atom::NIL;
    for statement in statements(source) {
        last = statement.execute(&mut ctx)?;
    }
    Ok(last)
}

fn run(source: &str) -> EvalResult {
    run_in(&Transaction::new(registry()), source)
}

fn value(source: &str) -> Atom {
    run(source).unwrap_or_else(|e| panic!("evaluation of {source:?} failed: {e}"))
}

fn error(source: &str) -> EvalError {
    match run(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
        Err(error) => error,
    }
}

fn handle(atom: &Atom) -> ObjectHandle {
    match atom {
        Atom::Object(Some(handle)) => *handle,
        other => panic!("expected an object, got {other:?}"),
    }
}

fn member(transaction: &Transaction, object: ObjectHandle, name: &str) -> Atom {
    transaction
        .read_member(&Atom::object(object), name)
        .unwrap_or_else(|e| panic!("reading {name}: {e}"))
}

#[test]
fn precedence() {
    assert_eq!(value("2 + 3 * 2"), Atom::Int(8));
    assert_eq!(value("(2 + 3) * 2"), Atom::Int(10));
    assert_eq!(value("-2 ** 2"), Atom::Int(-4));
    assert_eq!(value("1 + 2 << 1"), Atom::Int(6));
}

#[test]
fn boolean_operator_remap() {
    assert_eq!(value("true + false"), Atom::Bool(true));
    assert_eq!(value("true * false"), Atom::Bool(false));
    assert_eq!(
        error("true - false").kind,
        EvalErrorKind::ForbiddenOperator {
            op: "-",
            ty: AtomType::Bool,
        }
    );
}

#[test]
fn string_concatenation() {
    assert_eq!(value("\"a\" + 1"), Atom::string("a1"));
    assert_eq!(value("\"n=\" + 1 + 2"), Atom::string("n=12"));
}

#[test]
fn float_operators() {
    assert_eq!(value("1.0 ** 2.0"), Atom::Float(1.0));
    assert_eq!(
        error("1.0 & 2.0").kind,
        EvalErrorKind::ForbiddenOperator {
            op: "&",
            ty: AtomType::Float,
        }
    );
}

#[test]
fn unary_plus_skips_type_checks() {
    assert_eq!(value("+\"text\""), Atom::string("text"));
    assert_eq!(value("+[1]"), Atom::Array(vec![Atom::Int(1)]));
    assert!(run("-\"text\"").is_err());
}

#[test]
fn collections() {
    assert_eq!(
        value("[1, 2, 3]"),
        Atom::Array(vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)])
    );
    assert_eq!(
        value("{(1, 2), (3, 4)}"),
        Atom::Dict(vec![
            (Atom::Int(1), Atom::Int(2)),
            (Atom::Int(3), Atom::Int(4)),
        ])
    );
    assert_eq!(value("(1, \"b\")"), Atom::pair(Atom::Int(1), Atom::string("b")));
}

#[test]
fn collections_survive_serialization() {
    for source in ["[1, 2, 3]", "{(1, 2), (3, 4)}", "[(1.5, nil), {(\"k\", [true])}]"] {
        let first = value(source);
        assert_eq!(value(&first.to_source()), first, "re-parsing {source}");
    }
}

#[test]
fn duplicate_dictionary_keys_are_rejected() {
    let error = error("{(1, 2), (1, 3)}");
    assert_eq!(error.kind, EvalErrorKind::DuplicateKey("1".to_string()));
    assert_eq!(error.span, Some(Span::new(10, 11)));
}

#[test]
fn ternary_evaluates_only_taken_branch() {
    assert_eq!(value("1 < 2 ? \"yes\" : missing"), Atom::string("yes"));
    assert_eq!(value("0 ? missing : 5"), Atom::Int(5));
    // (true ? 0 : 1) is 0, which selects the else arm of the second group.
    assert_eq!(value("true ? 0 : 1 ? 10 : 20"), Atom::Int(20));
}

#[test]
fn ternary_condition_must_convert_to_bool() {
    assert_eq!(
        error("\"s\" ? 1 : 2").kind,
        EvalErrorKind::ConversionFailed {
            from: AtomType::Str,
            target: AtomType::Bool,
        }
    );
}

#[test]
fn local_bindings() {
    assert_eq!(value("x is 4 x * x"), Atom::Int(16));
    assert_eq!(value("p is (1, 2) p"), Atom::pair(Atom::Int(1), Atom::Int(2)));
}

#[test]
fn rooted_names_are_plain_keys() {
    let transaction = Transaction::new(registry());
    transaction.export("~/colors/red", Atom::Int(0xff0000));
    assert_eq!(
        run_in(&transaction, "~/colors/red + 1"),
        Ok(Atom::Int(0xff0001))
    );
    assert_eq!(
        run_in(&transaction, "$/colors/red").map_err(|e| e.kind),
        Err(EvalErrorKind::UnknownVariable("$/colors/red".to_string()))
    );
}

#[test]
fn unknown_variable() {
    let error = error("1 + missing");
    assert_eq!(
        error.kind,
        EvalErrorKind::UnknownVariable("missing".to_string())
    );
    assert_eq!(error.span, Some(Span::new(4, 11)));
    assert!(error.to_string().starts_with("unknown variable name"));
}

#[test]
fn unknown_metaclass() {
    let error = error("Camera( fov = 1 )");
    assert_eq!(error.kind, EvalErrorKind::UnknownClass("Camera".to_string()));
    assert!(error.to_string().starts_with("unknown metaclass"));
}

#[test]
fn object_literal_assigns_with_conversion() {
    let transaction = Transaction::new(registry());
    let light = run_in(
        &transaction,
        "Light( intensity = 2 label = \"key \" + 1 on = 1 )",
    )
    .unwrap_or_else(|e| panic!("{e}"));
    let light = handle(&light);
    assert_eq!(member(&transaction, light, "intensity"), Atom::Float(2.0));
    assert_eq!(member(&transaction, light, "label"), Atom::string("key 1"));
    assert_eq!(member(&transaction, light, "on"), Atom::Bool(true));
}

#[test]
fn nested_objects_assign_to_their_own_instance() {
    let transaction = Transaction::new(registry());
    let a = run_in(&transaction, "A( x = 1 child = B( y = 2 ) z = 3 )")
        .unwrap_or_else(|e| panic!("{e}"));
    let a = handle(&a);
    assert_eq!(member(&transaction, a, "x"), Atom::Int(1));
    assert_eq!(member(&transaction, a, "z"), Atom::Int(3));
    let b = handle(&member(&transaction, a, "child"));
    assert_eq!(member(&transaction, b, "y"), Atom::Int(2));
    assert_eq!(transaction.class_name(b), Some("B".to_string()));
}

#[test]
fn nested_object_statement_does_not_cross_assign() {
    let transaction = Transaction::new(registry());
    let a = run_in(&transaction, "A( x = 1 B( y = 2 ) z = 3 )").unwrap_or_else(|e| panic!("{e}"));
    let a = handle(&a);
    assert_eq!(member(&transaction, a, "x"), Atom::Int(1));
    assert_eq!(member(&transaction, a, "z"), Atom::Int(3));
    assert_eq!(
        transaction.read_member(&Atom::object(a), "y").map_err(|e| e.kind),
        Err(EvalErrorKind::InvalidMember {
            class: "A".to_string(),
            member: "y".to_string(),
        })
    );
}

#[test]
fn sibling_bodies_do_not_share_locals() {
    let error = error("A( x is 1 ) B( y = x )");
    assert_eq!(error.kind, EvalErrorKind::UnknownVariable("x".to_string()));
}

#[test]
fn nested_bodies_see_enclosing_locals() {
    let transaction = Transaction::new(registry());
    let a = run_in(&transaction, "A( n is 5 child = B( y = n * 2 ) )")
        .unwrap_or_else(|e| panic!("{e}"));
    let b = handle(&member(&transaction, handle(&a), "child"));
    assert_eq!(member(&transaction, b, "y"), Atom::Int(10));
}

#[test]
fn exports_are_visible_everywhere() {
    assert_eq!(value("A( export y is 2 ) B( y = y ).y"), Atom::Int(2));
}

#[test]
fn member_access() {
    assert_eq!(value("B( y = 7 ).y + 1"), Atom::Int(8));
    assert_eq!(value("a is A( child = B( y = 3 ) ) a.child.y"), Atom::Int(3));
    assert_eq!(
        error("B( ).missing").kind,
        EvalErrorKind::InvalidMember {
            class: "B".to_string(),
            member: "missing".to_string(),
        }
    );
    assert_eq!(error("A( ).child.y").kind, EvalErrorKind::NullReference);
    assert_eq!(
        error("(1).y").kind,
        EvalErrorKind::NotAnObject(AtomType::Int)
    );
}

#[test]
fn assignment_outside_object() {
    let error = error("x = 1");
    assert_eq!(error.kind, EvalErrorKind::NoCurrentObject("x".to_string()));
    assert_eq!(error.span, Some(Span::new(0, 5)));
}

#[test]
fn assignment_to_unknown_property() {
    assert_eq!(
        error("B( q = 1 )").kind,
        EvalErrorKind::InvalidMember {
            class: "B".to_string(),
            member: "q".to_string(),
        }
    );
}

#[test]
fn assignment_that_cannot_convert() {
    assert_eq!(
        error("Light( intensity = \"bright\" )").kind,
        EvalErrorKind::ConversionFailed {
            from: AtomType::Str,
            target: AtomType::Float,
        }
    );
}

#[test]
fn innermost_span_wins() {
    let error = error("A( x = 1 / 0 )");
    assert_eq!(error.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(error.span, Some(Span::new(7, 12)));
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 2_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(value(&source), Atom::Int(1));
}
