//! Primary expressions, collections and `is` bindings.

use dcl_ir::{Atom, Expr, ExprKind, Span, Stmt, Token, TokenKind, TokenSet, VarScope};
use dcl_lexer::{parse_float_literal, parse_int_literal};

use crate::combinator::{expect, expect_mask, optional, Production, Ref, Rule};

const PATH_ROOT: TokenSet = TokenSet::new()
    .with(TokenKind::Dollar)
    .with(TokenKind::Complement);

/// Alternatives are ordered most specific first: an object literal
/// starts with the same identifier a variable reference would match.
pub(super) fn primary(expr: Ref<Expr>, statement: Ref<Stmt>) -> Rule<Expr> {
    literal()
        .or(object(statement))
        .or(variable())
        .or(array(expr.clone()))
        .or(dict(expr.clone()))
        .or(parenthesized(expr))
        .boxed()
}

/// `["export"] IDENT "is" (pair | array | dict | conditional)`
pub(super) fn binding(expr: Ref<Expr>, conditional: Rule<Expr>) -> Rule<Expr> {
    let value = pair(expr.clone())
        .or(array(expr.clone()))
        .or(dict(expr))
        .or(conditional);

    optional(TokenKind::Export)
        .and(expect(TokenKind::Ident))
        .and(expect(TokenKind::Is))
        .and(value)
        .select(|(((export, name), _), value)| {
            let scope = if export.is_some() {
                VarScope::Global
            } else {
                VarScope::Local
            };
            let start = export.map_or(name.span, |token| token.span);
            let span = start.merge(value.span);
            Expr::new(
                ExprKind::Export {
                    name: name.text.to_string(),
                    value: Box::new(value),
                    scope,
                },
                span,
            )
        })
        .boxed()
}

fn literal() -> Rule<Expr> {
    let nil = expect(TokenKind::Nil).select(|token| constant(Atom::NIL, &token));
    let yes = expect(TokenKind::True).select(|token| constant(Atom::Bool(true), &token));
    let no = expect(TokenKind::False).select(|token| constant(Atom::Bool(false), &token));
    let int = expect(TokenKind::Int).try_select(|token| {
        let value = parse_int_literal(&token.text)?;
        Some(constant(Atom::Int(value), &token))
    });
    let float = expect(TokenKind::Float).try_select(|token| {
        let value = parse_float_literal(&token.text)?;
        Some(constant(Atom::Float(value), &token))
    });
    let string = expect(TokenKind::String)
        .select(|token| constant(Atom::Str(token.text.to_string()), &token));

    nil.or(yes).or(no).or(int).or(float).or(string).boxed()
}

fn constant(value: Atom, token: &Token) -> Expr {
    Expr::new(ExprKind::Literal(value), token.span)
}

/// `IDENT | ("$" | "~") ("/" IDENT)+`
///
/// Rooted paths become one name, `~/a/b`, used as the lookup key.
fn variable() -> Rule<Expr> {
    let segment = expect(TokenKind::Div).and(expect(TokenKind::Ident));
    let rooted = expect_mask(PATH_ROOT)
        .and(segment.at_least_once())
        .select(|(root, segments)| {
            let mut name = root.text.to_string();
            let mut span = root.span;
            for (_, ident) in segments {
                name.push('/');
                name.push_str(&ident.text);
                span = span.merge(ident.span);
            }
            Expr::new(ExprKind::Variable(name), span)
        });
    let bare = expect(TokenKind::Ident)
        .select(|token| Expr::new(ExprKind::Variable(token.text.to_string()), token.span));

    rooted.or(bare).boxed()
}

/// `IDENT "(" statement* ")"`
fn object(statement: Ref<Stmt>) -> Rule<Expr> {
    expect(TokenKind::Ident)
        .and(expect(TokenKind::LParen))
        .and(statement.many())
        .and(expect(TokenKind::RParen))
        .select(|(((class, _), body), close)| {
            Expr::new(
                ExprKind::Object {
                    class: class.text.to_string(),
                    body,
                },
                class.span.merge(close.span),
            )
        })
        .boxed()
}

/// `expr ("," expr)*`
fn list<T: 'static>(item: impl Production<Output = T> + Clone + 'static) -> Rule<Vec<T>> {
    item.clone()
        .and(expect(TokenKind::Comma).and(item).many())
        .select(|(first, rest)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest.into_iter().map(|(_, item)| item));
            items
        })
        .boxed()
}

/// `"[" (expr ("," expr)*)? "]"`
fn array(expr: Ref<Expr>) -> Rule<Expr> {
    expect(TokenKind::LBracket)
        .and(list(expr).maybe())
        .and(expect(TokenKind::RBracket))
        .select(|((open, items), close)| {
            Expr::new(
                ExprKind::Array(items.unwrap_or_default()),
                open.span.merge(close.span),
            )
        })
        .boxed()
}

/// `"(" expr "," expr ")"`, yielding both halves and the full span.
fn pair_parts(expr: Ref<Expr>) -> Rule<(Expr, Expr, Span)> {
    expect(TokenKind::LParen)
        .and(expr.clone())
        .and(expect(TokenKind::Comma))
        .and(expr)
        .and(expect(TokenKind::RParen))
        .select(|((((open, first), _), second), close)| {
            (first, second, open.span.merge(close.span))
        })
        .boxed()
}

fn pair(expr: Ref<Expr>) -> Rule<Expr> {
    pair_parts(expr)
        .select(|(first, second, span)| {
            Expr::new(ExprKind::Pair(Box::new(first), Box::new(second)), span)
        })
        .boxed()
}

/// `"{" (entry ("," entry)*)? "}"` where each entry is a pair.
fn dict(expr: Ref<Expr>) -> Rule<Expr> {
    let entry = pair_parts(expr).select(|(key, value, _)| (key, value)).boxed();
    expect(TokenKind::LBrace)
        .and(list(entry).maybe())
        .and(expect(TokenKind::RBrace))
        .select(|((open, entries), close)| {
            Expr::new(
                ExprKind::Dict(entries.unwrap_or_default()),
                open.span.merge(close.span),
            )
        })
        .boxed()
}

/// `"(" expr ("," expr)? ")"`: a pair with the comma, a group without.
///
/// Both shapes share the prefix, so they are matched together instead of
/// re-parsing the first expression on the fallback.
fn parenthesized(expr: Ref<Expr>) -> Rule<Expr> {
    expect(TokenKind::LParen)
        .and(expr.clone())
        .and(expect(TokenKind::Comma).and(expr).maybe())
        .and(expect(TokenKind::RParen))
        .select(|(((open, first), second), close)| {
            let span = open.span.merge(close.span);
            match second {
                Some((_, second)) => {
                    Expr::new(ExprKind::Pair(Box::new(first), Box::new(second)), span)
                }
                None => Expr::new(first.kind, span),
            }
        })
        .boxed()
}
