//! Syntax tree produced by the grammar.
//!
//! Nodes own their children exclusively (`Box`/`Vec`); there are no parent
//! links. Every node records the span of the source it was reduced from,
//! which the evaluator attaches to errors.

use crate::{Atom, Span};
use std::fmt;

/// Binding scope of an `is` declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VarScope {
    /// `name is value`: visible in the declaring context and its children.
    Local,
    /// `export name is value`: visible to every context of the transaction.
    Global,
}

/// Binary operators, by precedence group.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Pow,
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    BitAnd,
    BitXor,
    BitOr,
}

impl BinaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Pow => "**",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
        }
    }

    /// `true` for the six comparison operators, which yield `Bool`.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOp::Lt
                | BinaryOp::LtEq
                | BinaryOp::Gt
                | BinaryOp::GtEq
                | BinaryOp::Eq
                | BinaryOp::NotEq
        )
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Prefix operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+x`: yields the operand unchanged, with no type check.
    Plus,
    /// `-x`
    Neg,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// An expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// `nil`, `true`, `false`, numbers and strings.
    Literal(Atom),
    /// `name`, `$/a/b` or `~/a/b`; rooted paths are kept as one lookup key.
    Variable(String),
    /// `[export] name is value`
    Export {
        name: String,
        value: Box<Expr>,
        scope: VarScope,
    },
    /// `object.member`
    Member { object: Box<Expr>, member: String },
    /// `Class( statements... )`
    Object { class: String, body: Vec<Stmt> },
    /// `(a, b)`
    Pair(Box<Expr>, Box<Expr>),
    /// `[a, b, ...]`
    Array(Vec<Expr>),
    /// `{(k, v), ...}`
    Dict(Vec<(Expr, Expr)>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `cond ? then_branch : else_branch`
    Ternary {
        cond: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

/// A statement inside an object body or at the top level.
#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `property = value`, applied to the object being built.
    Assign { property: String, value: Expr },
    /// Any other expression; its value is discarded.
    Expr(Expr),
}
