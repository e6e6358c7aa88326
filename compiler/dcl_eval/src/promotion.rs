//! Conversions between atom types.
//!
//! | From \ To | bool | int | float | string |
//! |---|---|---|---|---|
//! | bool | = | 0 / 1 | 0.0 / 1.0 | `true` / `false` |
//! | int | non-zero | = | widen | decimal |
//! | float | non-zero | truncate | = | shortest form |
//! | string | - | - | - | = |
//! | object | non-null | - | - | - |
//!
//! Pairs, arrays and dictionaries only convert to their own type.

use dcl_ir::{Atom, AtomType};

use crate::errors::{conversion_failed, invalid_atom_type, EvalError};

/// Convert `value` to `target`, as assigning it to a slot of that type
/// would.
pub fn convert(value: &Atom, target: AtomType) -> Result<Atom, EvalError> {
    if value.ty() == target {
        return Ok(value.clone());
    }
    let converted = match (value, target) {
        (Atom::Int(n), AtomType::Bool) => Some(Atom::Bool(*n != 0)),
        (Atom::Float(x), AtomType::Bool) => Some(Atom::Bool(*x != 0.0)),
        (Atom::Object(handle), AtomType::Bool) => Some(Atom::Bool(handle.is_some())),

        (Atom::Bool(b), AtomType::Int) => Some(Atom::Int(i64::from(*b))),
        (Atom::Float(x), AtomType::Int) => Some(Atom::Int(truncate(*x))),

        (Atom::Bool(b), AtomType::Float) => Some(Atom::Float(if *b { 1.0 } else { 0.0 })),
        (Atom::Int(n), AtomType::Float) => Some(Atom::Float(widen(*n))),

        (Atom::Bool(_) | Atom::Int(_) | Atom::Float(_), AtomType::Str) => {
            Some(Atom::Str(value.to_string()))
        }

        _ => None,
    };
    converted.ok_or_else(|| conversion_failed(value.ty(), target))
}

/// Saturating truncation toward zero; NaN becomes 0.
#[expect(clippy::cast_possible_truncation, reason = "float to int conversion truncates")]
pub(crate) fn truncate(x: f64) -> i64 {
    x as i64
}

#[expect(clippy::cast_precision_loss, reason = "int to float conversion widens")]
pub(crate) fn widen(n: i64) -> f64 {
    n as f64
}

/// Reduce a non-scalar operand to the first scalar type it converts to,
/// in [`AtomType::PROMOTION_ORDER`]. Scalars come back unchanged.
pub fn promote_to_scalar(value: Atom) -> Result<Atom, EvalError> {
    if value.ty().is_scalar() {
        return Ok(value);
    }
    AtomType::PROMOTION_ORDER
        .into_iter()
        .find_map(|target| convert(&value, target).ok())
        .ok_or_else(|| invalid_atom_type(value.ty()))
}

pub(crate) fn as_bool(value: &Atom) -> Result<bool, EvalError> {
    match convert(value, AtomType::Bool)? {
        Atom::Bool(b) => Ok(b),
        other => Err(conversion_failed(other.ty(), AtomType::Bool)),
    }
}

pub(crate) fn as_int(value: &Atom) -> Result<i64, EvalError> {
    match convert(value, AtomType::Int)? {
        Atom::Int(n) => Ok(n),
        other => Err(conversion_failed(other.ty(), AtomType::Int)),
    }
}

pub(crate) fn as_float(value: &Atom) -> Result<f64, EvalError> {
    match convert(value, AtomType::Float)? {
        Atom::Float(x) => Ok(x),
        other => Err(conversion_failed(other.ty(), AtomType::Float)),
    }
}

pub(crate) fn as_string(value: &Atom) -> Result<String, EvalError> {
    match convert(value, AtomType::Str)? {
        Atom::Str(s) => Ok(s),
        other => Err(conversion_failed(other.ty(), AtomType::Str)),
    }
}
