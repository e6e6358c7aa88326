//! The dcl grammar, assembled once from combinators.
//!
//! Precedence ladder, tightest first:
//!
//! | Level | Operators | Shape |
//! |---|---|---|
//! | primary | literal, object, variable, `[..]`, `{..}`, `(..)` | |
//! | member | `.` | left chain |
//! | power | `**` | left fold |
//! | unary | `+ - ! ~` | prefix |
//! | multiplicative | `* / %` | left fold |
//! | additive | `+ -` | left fold |
//! | shift | `<< >>` | left fold |
//! | relational | `< <= > >=` | left fold |
//! | equality | `== !=` | left fold |
//! | bitwise | `&`, then `^`, then `\|` | left fold |
//! | conditional | `? :` | previous result becomes the next condition |
//!
//! An expression is an `is` binding or a conditional. A statement is a
//! property assignment or an expression, optionally followed by `;`.

mod operators;
mod primary;

use dcl_ir::{Expr, Stmt, StmtKind, TokenKind, TokenList};
use tracing::debug;

use crate::combinator::{expect, optional, Forward, Production, Ref, Rule};
use crate::{Cursor, ParseError};

pub struct Grammar {
    expr: Forward<Expr>,
    statement: Forward<Stmt>,
    unary: Forward<Expr>,
    program: Rule<Vec<Stmt>>,
    expression: Rule<Expr>,
}

impl Grammar {
    pub fn new() -> Self {
        let expr = Forward::new();
        let statement = Forward::new();
        let unary = Forward::new();

        let primary = primary::primary(expr.handle(), statement.handle());
        let conditional = operators::conditional_ladder(primary, &unary);
        let binding = primary::binding(expr.handle(), conditional.clone());
        expr.define(binding.or(conditional).boxed());
        statement.define(statement_rule(expr.handle()));

        let program = statement
            .handle()
            .many()
            .and(expect(TokenKind::Eof))
            .select(|(statements, _)| statements)
            .boxed();
        let expression = expr
            .handle()
            .and(expect(TokenKind::Eof))
            .select(|(expr, _)| expr)
            .boxed();

        let grammar = Grammar {
            expr,
            statement,
            unary,
            program,
            expression,
        };
        debug_assert!(grammar.is_complete());
        debug!("grammar built");
        grammar
    }

    /// Whether every recursive rule has a definition.
    pub fn is_complete(&self) -> bool {
        self.expr.is_defined() && self.statement.is_defined() && self.unary.is_defined()
    }

    /// Parse a sequence of statements that must cover the whole input.
    pub fn parse_program(&self, tokens: &TokenList) -> Result<Vec<Stmt>, ParseError> {
        let mut cursor = Cursor::new(tokens);
        let statements = self.program.parse(&mut cursor);
        debug!(
            tokens = tokens.len(),
            ok = statements.is_some(),
            "parsed program"
        );
        statements.ok_or_else(|| ParseError::from_cursor(&cursor))
    }

    /// Parse a single expression that must cover the whole input.
    pub fn parse_expr(&self, tokens: &TokenList) -> Result<Expr, ParseError> {
        let mut cursor = Cursor::new(tokens);
        let expr = self.expression.parse(&mut cursor);
        expr.ok_or_else(|| ParseError::from_cursor(&cursor))
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// `IDENT "=" expr | expr`, then an optional `;`.
fn statement_rule(expr: Ref<Expr>) -> Rule<Stmt> {
    let assign = expect(TokenKind::Ident)
        .and(expect(TokenKind::Assign))
        .and(expr.clone())
        .select(|((property, _), value)| {
            let span = property.span.merge(value.span);
            Stmt::new(
                StmtKind::Assign {
                    property: property.text.to_string(),
                    value,
                },
                span,
            )
        });
    let evaluate = expr.select(|expr| {
        let span = expr.span;
        Stmt::new(StmtKind::Expr(expr), span)
    });

    assign
        .or(evaluate)
        .and(optional(TokenKind::Semicolon))
        .select(|(statement, _)| statement)
        .boxed()
}
