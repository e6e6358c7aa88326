//! One content load: grammar, transaction and the top-level scope.
//!
//! [`Session::load`] runs a whole source text and stops at the first error.
//! [`Session::interactive_line`] runs statements one at a time, drops the
//! ones that fail and keeps going, so top-level bindings made by earlier
//! lines stay visible to later ones.

use std::mem;

use dcl_eval::{Evaluate, Execute, ParseContext, Reflect, Transaction};
use dcl_ir::{Atom, Stmt};
use dcl_parse::Grammar;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::LoadError;

pub struct Session {
    grammar: Grammar,
    transaction: Transaction,
    /// Top-level locals carried between interactive lines.
    locals: FxHashMap<String, Atom>,
}

impl Session {
    pub fn new(registry: impl Reflect + 'static) -> Self {
        Session {
            grammar: Grammar::new(),
            transaction: Transaction::new(registry),
            locals: FxHashMap::default(),
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Lex and parse `source` without running it.
    pub fn parse(&self, source: &str) -> Result<Vec<Stmt>, LoadError> {
        let tokens = dcl_lexer::lex(source)?;
        Ok(self.grammar.parse_program(&tokens)?)
    }

    /// Evaluate a single expression against the exported globals.
    ///
    /// Trailing input after the expression is a syntax error. Locals it
    /// binds with `is` are dropped afterwards.
    pub fn eval_expr(&self, source: &str) -> Result<Atom, LoadError> {
        let tokens = dcl_lexer::lex(source)?;
        let expr = self.grammar.parse_expr(&tokens)?;
        let mut ctx = ParseContext::new(&self.transaction);
        Ok(expr.eval(&mut ctx)?)
    }

    /// Run `source` as one batch in a fresh top-level scope.
    ///
    /// Returns the value of the last statement, or `None` for empty input.
    /// Objects created before a failure stay in the registry, possibly
    /// half populated.
    pub fn load(&mut self, name: &str, source: &str) -> Result<Option<Atom>, LoadError> {
        let statements = self.parse(source)?;
        debug!(name, statements = statements.len(), "loading");

        let mut ctx = ParseContext::new(&self.transaction);
        let mut last = None;
        for statement in &statements {
            last = Some(statement.execute(&mut ctx)?);
        }
        Ok(last)
    }

    /// Run one line of interactive input.
    ///
    /// A lexical or syntax error rejects the whole line. Otherwise every
    /// statement yields its own result; a failing statement is discarded
    /// and the next one still runs.
    pub fn interactive_line(&mut self, source: &str) -> Vec<Result<Atom, LoadError>> {
        let statements = match self.parse(source) {
            Ok(statements) => statements,
            Err(error) => return vec![Err(error)],
        };

        let locals = mem::take(&mut self.locals);
        let mut ctx = ParseContext::with_locals(&self.transaction, locals);
        let results = statements
            .iter()
            .map(|statement| statement.execute(&mut ctx).map_err(LoadError::from))
            .collect();
        self.locals = ctx.into_locals();
        results
    }
}
