//! Bitset over token kinds.

use super::TokenKind;

/// A set of token kinds with O(1) membership.
///
/// Used by the combinator engine for operator-class matching
/// (`ExpectMask`) and by the parser to accumulate the kinds it would
/// have accepted at the furthest failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Empty set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u64 << kind.discriminant_index())
    }

    /// Builder for `const` sets: `TokenSet::new().with(A).with(B)`.
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub fn union_with(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub const fn contains(self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Members in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = TokenKind> {
        TokenKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// Render as "`(`", "`(` or `[`", "`(`, `[`, or identifier".
    pub fn format_expected(self) -> String {
        let names: Vec<&str> = self.iter().map(TokenKind::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_string(),
            [one] => (*one).to_string(),
            [a, b] => format!("{a} or {b}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}
