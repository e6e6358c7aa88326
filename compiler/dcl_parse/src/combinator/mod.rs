//! Parser combinators over a [`Cursor`].
//!
//! A [`Production`] either succeeds, possibly consuming tokens, or fails
//! and leaves the cursor where it found it. Failure is a plain `None`: it
//! is the ordinary "try the next alternative" path, not an error. The
//! grammar is assembled from these pieces once and reused for every parse.
//!
//! | Combinator | Succeeds when | Output |
//! |---|---|---|
//! | [`expect`] | next token has the kind | the token |
//! | [`expect_mask`] | next token's kind is in the set | the token |
//! | [`optional`] | always | `Some(token)` on a match |
//! | [`Production::and`] | both, in sequence | `(a, b)` |
//! | [`Production::or`] | either, left first | the first success |
//! | [`Production::many`] | always | zero or more results |
//! | [`Production::at_least_once`] | first attempt does | one or more results |
//! | [`Production::maybe`] | always | `Some` on a match |
//! | [`Production::select`] | inner does | `f(output)` |
//! | [`Production::try_select`] | inner does and `f` returns `Some` | `f(output)` |
//!
//! Recursive rules go through [`Forward`]/[`Ref`].

mod forward;

pub use forward::{Forward, Ref};

use std::rc::Rc;

use dcl_ir::{Token, TokenKind, TokenSet};
use tracing::trace;

use crate::Cursor;

/// A composable parsing rule.
pub trait Production {
    type Output;

    /// Try to match at the cursor. On `None` the cursor is unchanged.
    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output>;

    /// Sequence: `self` then `next`. Rolls back to before `self` if
    /// `next` fails.
    fn and<B>(self, next: B) -> And<Self, B>
    where
        Self: Sized,
        B: Production,
    {
        And(self, next)
    }

    /// Ordered alternation: `self`, or else `other` from the same position.
    fn or<B>(self, other: B) -> Or<Self, B>
    where
        Self: Sized,
        B: Production<Output = Self::Output>,
    {
        Or(self, other)
    }

    /// Greedy repetition; never fails.
    fn many(self) -> Many<Self>
    where
        Self: Sized,
    {
        Many(self)
    }

    /// Like [`Production::many`] but fails unless the first attempt matches.
    fn at_least_once(self) -> AtLeastOnce<Self>
    where
        Self: Sized,
    {
        AtLeastOnce(self)
    }

    /// Zero or one; never fails.
    fn maybe(self) -> Maybe<Self>
    where
        Self: Sized,
    {
        Maybe(self)
    }

    /// Map the output. `f` receives everything the inner production
    /// matched, tokens included, so it can build a node and its span.
    fn select<T, F>(self, f: F) -> Select<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        Select(self, f)
    }

    /// Map the output through a reduction that may reject it. A rejected
    /// match fails like any other, without consuming.
    fn try_select<T, F>(self, f: F) -> TrySelect<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Option<T>,
    {
        TrySelect(self, f)
    }

    /// Erase the combinator type so the rule can be shared.
    fn boxed(self) -> Rule<Self::Output>
    where
        Self: Sized + 'static,
    {
        Rule(Rc::new(self))
    }
}

/// A type-erased, cheaply clonable production.
pub struct Rule<T>(Rc<dyn Production<Output = T>>);

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Rule(Rc::clone(&self.0))
    }
}

impl<T> Production for Rule<T> {
    type Output = T;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<T> {
        self.0.parse(cursor)
    }
}

/// Match one token of `kind`.
pub fn expect(kind: TokenKind) -> Expect {
    Expect(kind)
}

/// Match one token whose kind is in `kinds`.
pub fn expect_mask(kinds: TokenSet) -> ExpectMask {
    ExpectMask(kinds)
}

/// Match one token of `kind` if present.
pub fn optional(kind: TokenKind) -> Optional {
    Optional(kind)
}

#[derive(Clone, Copy)]
pub struct Expect(TokenKind);

impl Production for Expect {
    type Output = Token;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Token> {
        if cursor.peek_kind() == self.0 {
            Some(cursor.read().clone())
        } else {
            cursor.note_failure(TokenSet::single(self.0));
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct ExpectMask(TokenSet);

impl Production for ExpectMask {
    type Output = Token;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Token> {
        if self.0.contains(cursor.peek_kind()) {
            Some(cursor.read().clone())
        } else {
            cursor.note_failure(self.0);
            None
        }
    }
}

#[derive(Clone, Copy)]
pub struct Optional(TokenKind);

impl Production for Optional {
    type Output = Option<Token>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Option<Token>> {
        Some(Expect(self.0).parse(cursor))
    }
}

pub struct And<A, B>(A, B);

impl<A: Production, B: Production> Production for And<A, B> {
    type Output = (A::Output, B::Output);

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output> {
        let start = cursor.position();
        let first = self.0.parse(cursor)?;
        match self.1.parse(cursor) {
            Some(second) => Some((first, second)),
            None => {
                cursor.set_position(start);
                None
            }
        }
    }
}

pub struct Or<A, B>(A, B);

impl<A, B> Production for Or<A, B>
where
    A: Production,
    B: Production<Output = A::Output>,
{
    type Output = A::Output;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output> {
        let start = cursor.position();
        if let Some(value) = self.0.parse(cursor) {
            return Some(value);
        }
        cursor.set_position(start);
        self.1.parse(cursor)
    }
}

pub struct Many<A>(A);

impl<A: Production> Production for Many<A> {
    type Output = Vec<A::Output>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output> {
        let mut items = Vec::new();
        repeat(&self.0, cursor, &mut items);
        Some(items)
    }
}

pub struct AtLeastOnce<A>(A);

impl<A: Production> Production for AtLeastOnce<A> {
    type Output = Vec<A::Output>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output> {
        let mut items = vec![self.0.parse(cursor)?];
        repeat(&self.0, cursor, &mut items);
        Some(items)
    }
}

/// Apply `production` until it fails or stops making progress.
fn repeat<A: Production>(production: &A, cursor: &mut Cursor<'_>, items: &mut Vec<A::Output>) {
    loop {
        let start = cursor.position();
        match production.parse(cursor) {
            Some(item) => {
                items.push(item);
                // A match that consumed nothing would match forever.
                if cursor.position() == start {
                    trace!(position = start, "repetition made no progress");
                    return;
                }
            }
            None => {
                cursor.set_position(start);
                return;
            }
        }
    }
}

pub struct Maybe<A>(A);

impl<A: Production> Production for Maybe<A> {
    type Output = Option<A::Output>;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<Self::Output> {
        let start = cursor.position();
        let value = self.0.parse(cursor);
        if value.is_none() {
            cursor.set_position(start);
        }
        Some(value)
    }
}

pub struct Select<A, F>(A, F);

impl<A, F, T> Production for Select<A, F>
where
    A: Production,
    F: Fn(A::Output) -> T,
{
    type Output = T;

    #[inline]
    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<T> {
        self.0.parse(cursor).map(&self.1)
    }
}

pub struct TrySelect<A, F>(A, F);

impl<A, F, T> Production for TrySelect<A, F>
where
    A: Production,
    F: Fn(A::Output) -> Option<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_>) -> Option<T> {
        let start = cursor.position();
        let value = self.0.parse(cursor).and_then(&self.1);
        if value.is_none() {
            cursor.set_position(start);
        }
        value
    }
}
