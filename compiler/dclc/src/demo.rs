//! Classes the `dclc` binary loads content against.

use dcl_eval::{ClassDef, Registry};
use dcl_ir::{Atom, AtomType};

/// A small game-object vocabulary: entities, lights and materials.
pub fn registry() -> Registry {
    Registry::new()
        .with_class(
            ClassDef::new("Entity")
                .property("name", AtomType::Str, "")
                .property("health", AtomType::Int, 100_i64)
                .property("speed", AtomType::Float, 1.0)
                .property("visible", AtomType::Bool, true)
                .property(
                    "position",
                    AtomType::Pair,
                    Atom::pair(Atom::Float(0.0), Atom::Float(0.0)),
                )
                .property("tags", AtomType::Array, Atom::Array(Vec::new()))
                .property("material", AtomType::Object, Atom::NIL),
        )
        .with_class(
            ClassDef::new("Light")
                .property("color", AtomType::Int, 0x00ff_ffff_i64)
                .property("intensity", AtomType::Float, 1.0)
                .property("target", AtomType::Object, Atom::NIL),
        )
        .with_class(
            ClassDef::new("Material")
                .property("shader", AtomType::Str, "default")
                .property("tint", AtomType::Int, 0x00ff_ffff_i64)
                .property("opacity", AtomType::Float, 1.0)
                .property("params", AtomType::Dict, Atom::Dict(Vec::new())),
        )
}
