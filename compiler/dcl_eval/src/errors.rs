//! Evaluation errors.
//!
//! Every failure during evaluation is an [`EvalError`]: a kind plus the
//! span of the innermost node that raised it. Errors are tagged on the
//! way up the tree and the first tag wins, so the reported location is
//! the most specific one.

use dcl_diagnostic::{Diagnostic, ErrorCode};
use dcl_ir::{AtomType, Span};
use thiserror::Error;

pub type EvalResult = Result<dcl_ir::Atom, EvalError>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("unknown variable name `{0}`")]
    UnknownVariable(String),
    #[error("unknown metaclass `{0}`")]
    UnknownClass(String),
    #[error("invalid member name `{member}` on `{class}`")]
    InvalidMember { class: String, member: String },
    #[error("operator `{op}` is not defined for {ty}")]
    ForbiddenOperator { op: &'static str, ty: AtomType },
    #[error("could not convert to {target}")]
    ConversionFailed { from: AtomType, target: AtomType },
    #[error("invalid atom type {0}")]
    InvalidAtomType(AtomType),
    #[error("expected an object, found {0}")]
    NotAnObject(AtomType),
    #[error("null object reference")]
    NullReference,
    #[error("duplicate dictionary key {0}")]
    DuplicateKey(String),
    #[error("property `{0}` assigned outside an object literal")]
    NoCurrentObject(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("modulo by zero")]
    ModuloByZero,
    #[error("integer overflow in {0}")]
    IntegerOverflow(&'static str),
    #[error("shift amount {0} is out of range")]
    ShiftOutOfRange(i64),
    #[error("property `{property}` rejected the value: {reason}")]
    PropertyRejected { property: String, reason: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Option<Span>,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        EvalError { kind, span: None }
    }

    /// Attach `span` unless a more specific one is already attached.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = Some(span);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            EvalErrorKind::UnknownVariable(_) => ErrorCode::E2001,
            EvalErrorKind::UnknownClass(_) => ErrorCode::E2002,
            EvalErrorKind::InvalidMember { .. } => ErrorCode::E2003,
            EvalErrorKind::ForbiddenOperator { .. } => ErrorCode::E3001,
            EvalErrorKind::ConversionFailed { .. } => ErrorCode::E3002,
            EvalErrorKind::InvalidAtomType(_) => ErrorCode::E3003,
            EvalErrorKind::NotAnObject(_) => ErrorCode::E3004,
            EvalErrorKind::NullReference => ErrorCode::E3005,
            EvalErrorKind::DuplicateKey(_) => ErrorCode::E3006,
            EvalErrorKind::NoCurrentObject(_) => ErrorCode::E3007,
            EvalErrorKind::DivisionByZero | EvalErrorKind::ModuloByZero => ErrorCode::E3008,
            EvalErrorKind::IntegerOverflow(_) | EvalErrorKind::ShiftOutOfRange(_) => {
                ErrorCode::E3009
            }
            EvalErrorKind::PropertyRejected { .. } => ErrorCode::E3010,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code()).with_message(self.kind.to_string());
        match self.span {
            Some(span) => diagnostic.with_span(span),
            None => diagnostic,
        }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

// Factories

#[cold]
pub fn unknown_variable(name: &str) -> EvalError {
    EvalErrorKind::UnknownVariable(name.to_string()).into()
}

#[cold]
pub fn unknown_class(name: &str) -> EvalError {
    EvalErrorKind::UnknownClass(name.to_string()).into()
}

#[cold]
pub fn invalid_member(class: &str, member: &str) -> EvalError {
    EvalErrorKind::InvalidMember {
        class: class.to_string(),
        member: member.to_string(),
    }
    .into()
}

#[cold]
pub fn forbidden_operator(op: &'static str, ty: AtomType) -> EvalError {
    EvalErrorKind::ForbiddenOperator { op, ty }.into()
}

#[cold]
pub fn conversion_failed(from: AtomType, target: AtomType) -> EvalError {
    EvalErrorKind::ConversionFailed { from, target }.into()
}

#[cold]
pub fn invalid_atom_type(ty: AtomType) -> EvalError {
    EvalErrorKind::InvalidAtomType(ty).into()
}

#[cold]
pub fn not_an_object(ty: AtomType) -> EvalError {
    EvalErrorKind::NotAnObject(ty).into()
}

#[cold]
pub fn null_reference() -> EvalError {
    EvalErrorKind::NullReference.into()
}

#[cold]
pub fn duplicate_key(key: String) -> EvalError {
    EvalErrorKind::DuplicateKey(key).into()
}

#[cold]
pub fn no_current_object(property: &str) -> EvalError {
    EvalErrorKind::NoCurrentObject(property.to_string()).into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalErrorKind::ModuloByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow(operation).into()
}

#[cold]
pub fn shift_out_of_range(amount: i64) -> EvalError {
    EvalErrorKind::ShiftOutOfRange(amount).into()
}

#[cold]
pub fn property_rejected(property: &str, reason: impl ToString) -> EvalError {
    EvalErrorKind::PropertyRejected {
        property: property.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
