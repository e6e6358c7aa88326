//! Language-level behavior: precedence, operator typing, scoping and
//! collections.

use dcl_eval::EvalErrorKind;
use dcl_ir::{Atom, AtomType};
use dclc::LoadError;
use pretty_assertions::assert_eq;

use crate::common::{eval, session};

fn eval_kind(source: &str) -> Option<EvalErrorKind> {
    match eval(source) {
        Err(LoadError::Eval(error)) => Some(error.kind),
        _ => None,
    }
}

#[test]
fn precedence() {
    assert_eq!(eval("2 + 3 * 2"), Ok(Atom::Int(8)));
    assert_eq!(eval("(2 + 3) * 2"), Ok(Atom::Int(10)));
    assert_eq!(eval("1 + 2 << 3"), Ok(Atom::Int(24)));
    assert_eq!(eval("2 ** 3 ** 2"), Ok(Atom::Int(64)));
    assert_eq!(eval("-2 ** 2"), Ok(Atom::Int(-4)));
    assert_eq!(eval("1 | 2 ^ 3 & 6"), Ok(Atom::Int(1 | (2 ^ (3 & 6)))));
}

#[test]
fn boolean_operator_remap() {
    assert_eq!(eval("true + false"), Ok(Atom::Bool(true)));
    assert_eq!(eval("true * false"), Ok(Atom::Bool(false)));
    assert_eq!(
        eval_kind("true - false"),
        Some(EvalErrorKind::ForbiddenOperator {
            op: "-",
            ty: AtomType::Bool
        })
    );
}

#[test]
fn string_concatenation_coerces_the_right_operand() {
    assert_eq!(eval("\"a\" + 1"), Ok(Atom::string("a1")));
    assert_eq!(eval("\"on: \" + true"), Ok(Atom::string("on: true")));
    assert_eq!(eval("\"x\" + 1.5"), Ok(Atom::string("x1.5")));
}

#[test]
fn float_operators() {
    assert_eq!(
        eval_kind("1.0 & 2.0"),
        Some(EvalErrorKind::ForbiddenOperator {
            op: "&",
            ty: AtomType::Float
        })
    );
    assert_eq!(eval("1.0 ** 2.0"), Ok(Atom::Float(1.0)));
    assert_eq!(eval("1.5 + 1"), Ok(Atom::Float(2.5)));
    assert_eq!(eval("1 + 1.9"), Ok(Atom::Int(2)));
}

#[test]
fn locals_do_not_leak_between_sibling_objects() {
    assert_eq!(
        eval_kind("A( x is 1 ) A( z = x )"),
        Some(EvalErrorKind::UnknownVariable("x".to_string()))
    );
    assert!(eval("A( x is 1 ) A( x is 5 z = x )").is_ok());
}

#[test]
fn exports_reach_every_context() {
    let mut session = session();
    let value = session.load("test.dcl", "A( export y is 2 ) B( y = y )");
    let Ok(Some(b)) = value else {
        panic!("expected an object, got {value:?}");
    };

    assert_eq!(session.transaction().global("y"), Some(Atom::Int(2)));
    assert_eq!(session.transaction().read_member(&b, "y"), Ok(Atom::Int(2)));
}

#[test]
fn unknown_names() {
    assert_eq!(
        eval_kind("undeclared"),
        Some(EvalErrorKind::UnknownVariable("undeclared".to_string()))
    );
    assert_eq!(
        eval_kind("Ghost( x = 1 )"),
        Some(EvalErrorKind::UnknownClass("Ghost".to_string()))
    );
}

#[test]
fn collections_round_trip_through_source() {
    let array = eval("[1,2,3]");
    assert_eq!(
        array,
        Ok(Atom::Array(vec![Atom::Int(1), Atom::Int(2), Atom::Int(3)]))
    );

    let dict = eval("{(1,2),(3,4)}");
    assert_eq!(
        dict,
        Ok(Atom::Dict(vec![
            (Atom::Int(1), Atom::Int(2)),
            (Atom::Int(3), Atom::Int(4)),
        ]))
    );

    for value in [array, dict] {
        let value = value.unwrap();
        assert_eq!(eval(&value.to_source()), Ok(value));
    }
}

#[test]
fn nested_collections_round_trip() {
    let source = "{(\"name\", [1.5, \"two\\n\", (true, nil)]), (2, {(3, -4)})}";
    let value = eval(source).unwrap();
    assert_eq!(eval(&value.to_source()), Ok(value));
}

#[test]
fn values_without_literals_round_trip() {
    let values = [
        Atom::Int(i64::MIN),
        Atom::Float(f64::INFINITY),
        Atom::Array(vec![Atom::Float(f64::NEG_INFINITY), Atom::Int(i64::MIN)]),
        Atom::Dict(vec![(Atom::Int(i64::MIN), Atom::Float(f64::INFINITY))]),
    ];
    for value in values {
        assert_eq!(eval(&value.to_source()), Ok(value));
    }

    let nan = eval(&Atom::Float(f64::NAN).to_source());
    assert!(matches!(nan, Ok(Atom::Float(x)) if x.is_nan()), "{nan:?}");
}

#[test]
fn parsing_is_idempotent() {
    let source = "export speed is 2 * 3\nA( x = speed child = B( y = -1 ) )";
    let first = session().parse(source).unwrap();
    let second = session().parse(source).unwrap();
    assert_eq!(first, second);

    let reused = session();
    assert_eq!(reused.parse(source).unwrap(), reused.parse(source).unwrap());
}

#[test]
fn nested_object_literals_assign_to_their_own_instance() {
    // `y` would be rejected if it landed on `A`.
    assert!(eval("A( x = 1 B( y = 2 ) z = 3 )").is_ok());

    let mut session = session();
    let value = session.load("test.dcl", "A( x = 1 child = B( y = 2 ) z = 3 )");
    let Ok(Some(a)) = value else {
        panic!("expected an object, got {value:?}");
    };
    let transaction = session.transaction();
    let b = transaction.read_member(&a, "child").unwrap();

    assert_eq!(transaction.read_member(&a, "x"), Ok(Atom::Int(1)));
    assert_eq!(transaction.read_member(&a, "z"), Ok(Atom::Int(3)));
    assert_eq!(transaction.read_member(&b, "y"), Ok(Atom::Int(2)));
    assert!(transaction.read_member(&a, "y").is_err());
    assert!(transaction.read_member(&b, "x").is_err());
}

#[test]
fn ternary_chooses_one_branch() {
    assert_eq!(eval("1 < 2 ? \"yes\" : missing"), Ok(Atom::string("yes")));
    assert_eq!(eval("0 ? 1 : 2"), Ok(Atom::Int(2)));
}

#[test]
fn member_access_reads_properties() {
    assert_eq!(
        eval("light is Light( intensity = 2 ) light.intensity * 2"),
        Ok(Atom::Float(4.0))
    );
    assert_eq!(eval_kind("nil.intensity"), Some(EvalErrorKind::NullReference));
}
