//! Node evaluation.
//!
//! Expressions implement [`Evaluate`], statements [`Execute`]. Both are a
//! direct walk of the tree; each node tags errors from its subtree with
//! its own span if nothing deeper did.

use dcl_ir::{Atom, Expr, ExprKind, Stmt, StmtKind, UnaryOp, VarScope};
use dcl_stack::ensure_sufficient_stack;

use crate::environment::ParseContext;
use crate::errors::{duplicate_key, no_current_object, unknown_variable, EvalResult};
use crate::operators::evaluate_binary;
use crate::promotion::as_bool;
use crate::unary_operators::evaluate_unary;

pub trait Evaluate {
    fn eval(&self, ctx: &mut ParseContext<'_>) -> EvalResult;
}

pub trait Execute {
    /// Run the statement. Returns the value it produced: the assigned
    /// value for an assignment, the expression's value otherwise.
    fn execute(&self, ctx: &mut ParseContext<'_>) -> EvalResult;
}

impl Evaluate for Expr {
    fn eval(&self, ctx: &mut ParseContext<'_>) -> EvalResult {
        ensure_sufficient_stack(|| eval_kind(&self.kind, ctx)).map_err(|e| e.with_span(self.span))
    }
}

fn eval_kind(kind: &ExprKind, ctx: &mut ParseContext<'_>) -> EvalResult {
    match kind {
        ExprKind::Literal(value) => Ok(value.clone()),
        ExprKind::Variable(name) => ctx.lookup(name).ok_or_else(|| unknown_variable(name)),
        ExprKind::Export { name, value, scope } => {
            let value = value.eval(ctx)?;
            match scope {
                VarScope::Local => ctx.define_local(name, value.clone()),
                VarScope::Global => ctx.export_global(name, value.clone()),
            }
            Ok(value)
        }
        ExprKind::Member { object, member } => {
            let target = object.eval(ctx)?;
            ctx.transaction().read_member(&target, member)
        }
        ExprKind::Object { class, body } => {
            let object = ctx.transaction().instantiate(class)?;
            let mut scope = ctx.child(object);
            for statement in body {
                statement.execute(&mut scope)?;
            }
            Ok(Atom::object(object))
        }
        ExprKind::Pair(first, second) => {
            let first = first.eval(ctx)?;
            let second = second.eval(ctx)?;
            Ok(Atom::pair(first, second))
        }
        ExprKind::Array(items) => items
            .iter()
            .map(|item| item.eval(ctx))
            .collect::<Result<Vec<_>, _>>()
            .map(Atom::Array),
        ExprKind::Dict(entries) => {
            let mut dict: Vec<(Atom, Atom)> = Vec::with_capacity(entries.len());
            for (key_expr, value_expr) in entries {
                let key = key_expr.eval(ctx)?;
                if dict.iter().any(|(existing, _)| *existing == key) {
                    return Err(duplicate_key(key.to_source()).with_span(key_expr.span));
                }
                let value = value_expr.eval(ctx)?;
                dict.push((key, value));
            }
            Ok(Atom::Dict(dict))
        }
        // `+` hands back its operand's value with no type check.
        ExprKind::Unary {
            op: UnaryOp::Plus,
            operand,
        } => operand.eval(ctx),
        ExprKind::Unary { op, operand } => evaluate_unary(operand.eval(ctx)?, *op),
        ExprKind::Binary { op, left, right } => {
            let left = left.eval(ctx)?;
            let right = right.eval(ctx)?;
            evaluate_binary(left, &right, *op)
        }
        ExprKind::Ternary {
            cond,
            then_branch,
            else_branch,
        } => {
            let cond_value = cond.eval(ctx)?;
            let taken = as_bool(&cond_value).map_err(|e| e.with_span(cond.span))?;
            if taken {
                then_branch.eval(ctx)
            } else {
                else_branch.eval(ctx)
            }
        }
    }
}

impl Execute for Stmt {
    fn execute(&self, ctx: &mut ParseContext<'_>) -> EvalResult {
        execute_kind(&self.kind, ctx).map_err(|e| e.with_span(self.span))
    }
}

fn execute_kind(kind: &StmtKind, ctx: &mut ParseContext<'_>) -> EvalResult {
    match kind {
        StmtKind::Assign { property, value } => {
            let value = value.eval(ctx)?;
            let object = ctx
                .scope_object()
                .ok_or_else(|| no_current_object(property))?;
            ctx.transaction().assign(object, property, &value)?;
            Ok(value)
        }
        StmtKind::Expr(expr) => expr.eval(ctx),
    }
}

#[cfg(test)]
mod tests;
