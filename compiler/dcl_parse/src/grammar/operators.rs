//! Operator precedence levels.
//!
//! Every binary level is `lower (op lower)*` folded left into a left-deep
//! tree.

use dcl_ir::{BinaryOp, Expr, ExprKind, Token, TokenKind, TokenSet, UnaryOp};

use crate::combinator::{expect, expect_mask, Forward, Production, Rule};

const POWER: TokenSet = TokenSet::single(TokenKind::Pow);

const PREFIX: TokenSet = TokenSet::new()
    .with(TokenKind::Add)
    .with(TokenKind::Sub)
    .with(TokenKind::Not)
    .with(TokenKind::Complement);

/// Binary levels above unary, tightest first.
const LADDER: [TokenSet; 8] = [
    TokenSet::new()
        .with(TokenKind::Mul)
        .with(TokenKind::Div)
        .with(TokenKind::Mod),
    TokenSet::new().with(TokenKind::Add).with(TokenKind::Sub),
    TokenSet::new()
        .with(TokenKind::LShift)
        .with(TokenKind::RShift),
    TokenSet::new()
        .with(TokenKind::Less)
        .with(TokenKind::LessOrEqual)
        .with(TokenKind::Greater)
        .with(TokenKind::GreaterOrEqual),
    TokenSet::new()
        .with(TokenKind::Equals)
        .with(TokenKind::NotEquals),
    TokenSet::single(TokenKind::And),
    TokenSet::single(TokenKind::Xor),
    TokenSet::single(TokenKind::Or),
];

/// Build every level from member access up to `? :`, defining `unary`
/// on the way.
pub(super) fn conditional_ladder(primary: Rule<Expr>, unary: &Forward<Expr>) -> Rule<Expr> {
    let power = binary_level(member(primary), POWER);
    unary.define(prefix(unary, power));

    let or = LADDER
        .into_iter()
        .fold(unary.handle().boxed(), binary_level);
    conditional(or)
}

/// `primary ("." IDENT)*`
fn member(primary: Rule<Expr>) -> Rule<Expr> {
    primary
        .and(expect(TokenKind::Dot).and(expect(TokenKind::Ident)).many())
        .select(|(object, accesses)| {
            accesses.into_iter().fold(object, |object, (_, name)| {
                let span = object.span.merge(name.span);
                Expr::new(
                    ExprKind::Member {
                        object: Box::new(object),
                        member: name.text.to_string(),
                    },
                    span,
                )
            })
        })
        .boxed()
}

/// `op unary | power`
fn prefix(unary: &Forward<Expr>, power: Rule<Expr>) -> Rule<Expr> {
    expect_mask(PREFIX)
        .and(unary.handle())
        .try_select(|(token, operand)| {
            let op = unary_op(token.kind)?;
            let span = token.span.merge(operand.span);
            Some(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                span,
            ))
        })
        .or(power)
        .boxed()
}

/// `lower (op lower)*`, left-associative.
fn binary_level(lower: Rule<Expr>, ops: TokenSet) -> Rule<Expr> {
    lower
        .clone()
        .and(expect_mask(ops).and(lower).many())
        .try_select(|(first, rest)| {
            rest.into_iter().try_fold(first, |left, (op, right)| {
                Some(binary(binary_op(&op)?, left, right))
            })
        })
        .boxed()
}

/// `or ("?" or ":" or)*`. Each arm takes the whole conditional built so
/// far as its condition: `a ? b : c ? d : e` is `(a ? b : c) ? d : e`.
fn conditional(or: Rule<Expr>) -> Rule<Expr> {
    let arm = expect(TokenKind::Question)
        .and(or.clone())
        .and(expect(TokenKind::Colon))
        .and(or.clone());
    or.and(arm.many())
        .select(|(first, arms)| {
            arms.into_iter()
                .fold(first, |cond, (((_, then_branch), _), else_branch)| {
                    let span = cond.span.merge(else_branch.span);
                    Expr::new(
                        ExprKind::Ternary {
                            cond: Box::new(cond),
                            then_branch: Box::new(then_branch),
                            else_branch: Box::new(else_branch),
                        },
                        span,
                    )
                })
        })
        .boxed()
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.merge(right.span);
    Expr::new(
        ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

fn binary_op(token: &Token) -> Option<BinaryOp> {
    Some(match token.kind {
        TokenKind::Pow => BinaryOp::Pow,
        TokenKind::Mul => BinaryOp::Mul,
        TokenKind::Div => BinaryOp::Div,
        TokenKind::Mod => BinaryOp::Mod,
        TokenKind::Add => BinaryOp::Add,
        TokenKind::Sub => BinaryOp::Sub,
        TokenKind::LShift => BinaryOp::Shl,
        TokenKind::RShift => BinaryOp::Shr,
        TokenKind::Less => BinaryOp::Lt,
        TokenKind::LessOrEqual => BinaryOp::LtEq,
        TokenKind::Greater => BinaryOp::Gt,
        TokenKind::GreaterOrEqual => BinaryOp::GtEq,
        TokenKind::Equals => BinaryOp::Eq,
        TokenKind::NotEquals => BinaryOp::NotEq,
        TokenKind::And => BinaryOp::BitAnd,
        TokenKind::Xor => BinaryOp::BitXor,
        TokenKind::Or => BinaryOp::BitOr,
        _ => return None,
    })
}

fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    Some(match kind {
        TokenKind::Add => UnaryOp::Plus,
        TokenKind::Sub => UnaryOp::Neg,
        TokenKind::Not => UnaryOp::Not,
        TokenKind::Complement => UnaryOp::BitNot,
        _ => return None,
    })
}
