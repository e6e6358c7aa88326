//! Binary operator dispatch.
//!
//! Dispatch is on the left operand's type. A non-scalar left operand is
//! first promoted to a scalar (see [`promote_to_scalar`]). The operator
//! must be defined for the left type; only then is the right operand
//! converted to the left operand's type.
//!
//! | Left | `+` | `- / %` | `*` | `**` | `<< >>` `& \| ^` | comparisons |
//! |---|---|---|---|---|---|---|
//! | bool | or | - | and | - | - | yes |
//! | int | add | yes | mul | int | yes | yes |
//! | float | add | yes (`%` is fmod) | mul | float | - | yes |
//! | string | concat | - | - | - | - | lexicographic |

use std::cmp::Ordering;

use dcl_ir::{Atom, AtomType, BinaryOp};

use crate::errors::{
    division_by_zero, forbidden_operator, integer_overflow, modulo_by_zero, shift_out_of_range,
    EvalError, EvalResult,
};
use crate::promotion::{as_bool, as_float, as_int, as_string, promote_to_scalar, truncate, widen};

/// Whether `op` is defined for a left operand of scalar type `ty`.
pub fn is_defined(ty: AtomType, op: BinaryOp) -> bool {
    if op.is_comparison() {
        return ty.is_scalar();
    }
    match ty {
        AtomType::Bool => matches!(op, BinaryOp::Add | BinaryOp::Mul),
        AtomType::Int => true,
        AtomType::Float => matches!(
            op,
            BinaryOp::Add
                | BinaryOp::Sub
                | BinaryOp::Mul
                | BinaryOp::Div
                | BinaryOp::Mod
                | BinaryOp::Pow
        ),
        AtomType::Str => op == BinaryOp::Add,
        AtomType::Object | AtomType::Pair | AtomType::Array | AtomType::Dict => false,
    }
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: Atom, right: &Atom, op: BinaryOp) -> EvalResult {
    let left = promote_to_scalar(left)?;
    if !is_defined(left.ty(), op) {
        return Err(forbidden_operator(op.as_symbol(), left.ty()));
    }
    match left {
        Atom::Bool(a) => eval_bool_binary(a, as_bool(right)?, op),
        // An Int left operand keeps the expression integral: a Float right
        // operand is truncated, so `1 + 1.9` is `2`.
        Atom::Int(a) => eval_int_binary(a, as_int(right)?, op),
        Atom::Float(a) => eval_float_binary(a, as_float(right)?, op),
        Atom::Str(a) => eval_string_binary(a, as_string(right)?, op),
        other => Err(forbidden_operator(op.as_symbol(), other.ty())),
    }
}

fn compare(ordering: Option<Ordering>, op: BinaryOp) -> Option<bool> {
    let ordering = ordering?;
    Some(match op {
        BinaryOp::Lt => ordering == Ordering::Less,
        BinaryOp::LtEq => ordering != Ordering::Greater,
        BinaryOp::Gt => ordering == Ordering::Greater,
        BinaryOp::GtEq => ordering != Ordering::Less,
        BinaryOp::Eq => ordering == Ordering::Equal,
        BinaryOp::NotEq => ordering != Ordering::Equal,
        _ => return None,
    })
}

fn eval_bool_binary(a: bool, b: bool, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Atom::Bool(a || b)),
        BinaryOp::Mul => Ok(Atom::Bool(a && b)),
        _ => compare(Some(a.cmp(&b)), op)
            .map(Atom::Bool)
            .ok_or_else(|| forbidden_operator(op.as_symbol(), AtomType::Bool)),
    }
}

#[inline]
fn checked_arith(result: Option<i64>, operation: &'static str) -> EvalResult {
    result.map(Atom::Int).ok_or_else(|| integer_overflow(operation))
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), "addition"),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), "subtraction"),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), "multiplication"),
        BinaryOp::Div if b == 0 => Err(division_by_zero()),
        BinaryOp::Div => checked_arith(a.checked_div(b), "division"),
        BinaryOp::Mod if b == 0 => Err(modulo_by_zero()),
        BinaryOp::Mod => checked_arith(a.checked_rem(b), "remainder"),
        BinaryOp::Pow => int_pow(a, b),
        BinaryOp::Shl => checked_arith(a.checked_shl(shift_amount(b)?), "left shift"),
        BinaryOp::Shr => checked_arith(a.checked_shr(shift_amount(b)?), "right shift"),
        BinaryOp::BitAnd => Ok(Atom::Int(a & b)),
        BinaryOp::BitOr => Ok(Atom::Int(a | b)),
        BinaryOp::BitXor => Ok(Atom::Int(a ^ b)),
        _ => compare(Some(a.cmp(&b)), op)
            .map(Atom::Bool)
            .ok_or_else(|| forbidden_operator(op.as_symbol(), AtomType::Int)),
    }
}

/// Non-negative exponents are exact; negative ones go through `powf` and
/// truncate.
fn int_pow(base: i64, exponent: i64) -> EvalResult {
    match u32::try_from(exponent) {
        Ok(exp) => checked_arith(base.checked_pow(exp), "exponentiation"),
        Err(_) if exponent < 0 => Ok(Atom::Int(truncate(widen(base).powf(widen(exponent))))),
        Err(_) => Err(integer_overflow("exponentiation")),
    }
}

fn shift_amount(amount: i64) -> Result<u32, EvalError> {
    match u32::try_from(amount) {
        Ok(bits) if bits < i64::BITS => Ok(bits),
        _ => Err(shift_out_of_range(amount)),
    }
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(Atom::Float(a + b)),
        BinaryOp::Sub => Ok(Atom::Float(a - b)),
        BinaryOp::Mul => Ok(Atom::Float(a * b)),
        BinaryOp::Div => Ok(Atom::Float(a / b)),
        BinaryOp::Mod => Ok(Atom::Float(a % b)),
        BinaryOp::Pow => Ok(Atom::Float(a.powf(b))),
        // NaN compares unequal to everything, including itself.
        BinaryOp::NotEq => Ok(Atom::Bool(a != b)),
        _ => match compare(a.partial_cmp(&b), op) {
            Some(result) => Ok(Atom::Bool(result)),
            None if op.is_comparison() => Ok(Atom::Bool(false)),
            None => Err(forbidden_operator(op.as_symbol(), AtomType::Float)),
        },
    }
}

fn eval_string_binary(a: String, b: String, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => {
            let mut joined = a;
            joined.push_str(&b);
            Ok(Atom::Str(joined))
        }
        _ => compare(Some(a.cmp(&b)), op)
            .map(Atom::Bool)
            .ok_or_else(|| forbidden_operator(op.as_symbol(), AtomType::Str)),
    }
}
