//! Shared helpers for the language tests.

use dcl_eval::ClassDef;
use dcl_ir::{Atom, AtomType};
use dclc::{LoadError, Session};

/// Classes `A` and `B` used by the scoping tests, plus the demo vocabulary.
pub fn session() -> Session {
    let mut registry = dclc::demo::registry();
    registry.register(
        ClassDef::new("A")
            .property("x", AtomType::Int, 0_i64)
            .property("z", AtomType::Int, 0_i64)
            .property("child", AtomType::Object, Atom::NIL),
    );
    registry.register(ClassDef::new("B").property("y", AtomType::Int, 0_i64));
    Session::new(registry)
}

/// Load `source` in a fresh session and return the last statement's value.
pub fn eval(source: &str) -> Result<Atom, LoadError> {
    session()
        .load("test.dcl", source)
        .map(|value| value.unwrap_or(Atom::NIL))
}

/// Load `source`, expecting failure, and render the diagnostic.
pub fn rendered_error(source: &str) -> String {
    match eval(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value:?}"),
        Err(error) => error.render("test.dcl", source),
    }
}

