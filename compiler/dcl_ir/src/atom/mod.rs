//! Dynamically-typed values.
//!
//! An [`Atom`] is what every expression evaluates to. Its variant is fixed
//! at construction; operators build new atoms instead of mutating.

use std::fmt;
use std::fmt::Write as _;

/// Non-owning reference to a reflected object instance.
///
/// The instance itself lives in the reflection registry's object store;
/// the handle is just its index there.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(u32);

impl ObjectHandle {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ObjectHandle(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Runtime type tag of an [`Atom`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AtomType {
    Bool,
    Int,
    Float,
    Str,
    Object,
    Pair,
    Array,
    Dict,
}

impl AtomType {
    /// Coercion order tried for operands that are not primitive scalars.
    pub const PROMOTION_ORDER: [AtomType; 4] =
        [AtomType::Bool, AtomType::Int, AtomType::Float, AtomType::Str];

    pub const fn name(self) -> &'static str {
        match self {
            AtomType::Bool => "bool",
            AtomType::Int => "int",
            AtomType::Float => "float",
            AtomType::Str => "string",
            AtomType::Object => "object",
            AtomType::Pair => "pair",
            AtomType::Array => "array",
            AtomType::Dict => "dictionary",
        }
    }

    /// `true` for the four primitive scalar tags operators dispatch on.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            AtomType::Bool | AtomType::Int | AtomType::Float | AtomType::Str
        )
    }
}

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dynamically-typed value.
#[derive(Clone, Debug, PartialEq)]
pub enum Atom {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Reference to a reflected instance; `None` is the `nil` reference.
    Object(Option<ObjectHandle>),
    Pair(Box<(Atom, Atom)>),
    Array(Vec<Atom>),
    /// Ordered entries with distinct keys.
    Dict(Vec<(Atom, Atom)>),
}

impl Atom {
    /// The `nil` literal.
    pub const NIL: Atom = Atom::Object(None);

    pub fn string(value: impl Into<String>) -> Self {
        Atom::Str(value.into())
    }

    pub fn pair(first: Atom, second: Atom) -> Self {
        Atom::Pair(Box::new((first, second)))
    }

    pub fn object(handle: ObjectHandle) -> Self {
        Atom::Object(Some(handle))
    }

    pub fn ty(&self) -> AtomType {
        match self {
            Atom::Bool(_) => AtomType::Bool,
            Atom::Int(_) => AtomType::Int,
            Atom::Float(_) => AtomType::Float,
            Atom::Str(_) => AtomType::Str,
            Atom::Object(_) => AtomType::Object,
            Atom::Pair(_) => AtomType::Pair,
            Atom::Array(_) => AtomType::Array,
            Atom::Dict(_) => AtomType::Dict,
        }
    }

    /// Render as source text that parses back to an equal atom.
    ///
    /// Values with no literal spelling (`i64::MIN`, infinities, NaN) are
    /// written as parenthesized expressions that evaluate to them. NaN
    /// comes back as NaN, which never compares equal. Object references
    /// other than `nil` have no literal form and render as `<object #n>`,
    /// which does not parse.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        match self {
            Atom::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            // The magnitude of `i64::MIN` does not fit in a literal.
            Atom::Int(i64::MIN) => out.push_str("(-9223372036854775807 - 1)"),
            Atom::Int(n) => {
                let _ = write!(out, "{n}");
            }
            Atom::Float(x) if x.is_nan() => out.push_str("(0.0 / 0.0)"),
            Atom::Float(x) if x.is_infinite() => {
                out.push_str(if *x > 0.0 { "(1.0 / 0.0)" } else { "(-1.0 / 0.0)" });
            }
            // `{:?}` always keeps a `.` or exponent, so the lexer reads it back as a float.
            Atom::Float(x) => {
                let _ = write!(out, "{x:?}");
            }
            Atom::Str(s) => write_quoted(s, out),
            Atom::Object(None) => out.push_str("nil"),
            Atom::Object(Some(handle)) => {
                let _ = write!(out, "<object {handle}>");
            }
            Atom::Pair(pair) => {
                out.push('(');
                pair.0.write_source(out);
                out.push_str(", ");
                pair.1.write_source(out);
                out.push(')');
            }
            Atom::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_source(out);
                }
                out.push(']');
            }
            Atom::Dict(entries) => {
                out.push('{');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('(');
                    key.write_source(out);
                    out.push_str(", ");
                    value.write_source(out);
                    out.push(')');
                }
                out.push('}');
            }
        }
    }
}

fn write_quoted(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Stringification used by concatenation: strings are written raw,
/// nested values in their source form.
impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Bool(b) => write!(f, "{b}"),
            Atom::Int(n) => write!(f, "{n}"),
            Atom::Float(x) => write!(f, "{x}"),
            Atom::Str(s) => f.write_str(s),
            other => f.write_str(&other.to_source()),
        }
    }
}

impl From<bool> for Atom {
    fn from(value: bool) -> Self {
        Atom::Bool(value)
    }
}

impl From<i64> for Atom {
    fn from(value: i64) -> Self {
        Atom::Int(value)
    }
}

impl From<f64> for Atom {
    fn from(value: f64) -> Self {
        Atom::Float(value)
    }
}

impl From<&str> for Atom {
    fn from(value: &str) -> Self {
        Atom::Str(value.to_string())
    }
}
