//! Tree-walking evaluator for the dcl description language.
//!
//! Evaluates the syntax tree from `dcl_parse` against a [`ParseContext`],
//! producing an [`Atom`](dcl_ir::Atom) per expression. Operators dispatch
//! on runtime type through [`evaluate_binary`] and [`evaluate_unary`];
//! objects are created and populated through the [`Reflect`] contract.
//!
//! ```ignore
//! let transaction = Transaction::new(registry);
//! let mut ctx = ParseContext::new(&transaction);
//! for statement in &statements {
//!     statement.execute(&mut ctx)?;
//! }
//! ```

mod environment;
mod errors;
mod exec;
mod operators;
mod promotion;
pub mod reflect;
mod unary_operators;

pub use environment::{ParseContext, Transaction};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use exec::{Evaluate, Execute};
pub use operators::{evaluate_binary, is_defined};
pub use promotion::{convert, promote_to_scalar};
pub use reflect::{ClassDef, ClassId, PropertyInfo, Reflect, ReflectError, Registry};
pub use unary_operators::evaluate_unary;

#[cfg(test)]
mod tests;
