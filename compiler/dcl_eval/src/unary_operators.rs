//! Unary operator dispatch.

use dcl_ir::{Atom, UnaryOp};

use crate::errors::{forbidden_operator, integer_overflow, EvalResult};
use crate::promotion::promote_to_scalar;

/// Evaluate `op value`.
///
/// `+` returns its operand untouched, whatever its type. The others
/// promote a non-scalar operand first.
pub fn evaluate_unary(value: Atom, op: UnaryOp) -> EvalResult {
    if op == UnaryOp::Plus {
        return Ok(value);
    }
    match (promote_to_scalar(value)?, op) {
        (Atom::Int(n), UnaryOp::Neg) => n
            .checked_neg()
            .map(Atom::Int)
            .ok_or_else(|| integer_overflow("negation")),
        (Atom::Float(x), UnaryOp::Neg) => Ok(Atom::Float(-x)),

        (Atom::Bool(b), UnaryOp::Not) => Ok(Atom::Bool(!b)),
        (Atom::Int(n), UnaryOp::Not) => Ok(Atom::Int(i64::from(n == 0))),

        (Atom::Int(n), UnaryOp::BitNot) => Ok(Atom::Int(!n)),

        (other, op) => Err(forbidden_operator(op.as_symbol(), other.ty())),
    }
}
