//! Reflection contract between the evaluator and the host's object model.
//!
//! Object literals, member reads and property assignments reach reflected
//! classes only through [`Reflect`]. [`Registry`] is an in-memory
//! implementation with typed properties and default values.

mod registry;

pub use registry::{ClassDef, Registry};

use dcl_ir::{Atom, AtomType, ObjectHandle};
use thiserror::Error;

/// Index of a class inside a [`Reflect`] implementation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassId(u32);

impl ClassId {
    pub const fn new(index: u32) -> Self {
        ClassId(index)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A resolved property: its slot and declared type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PropertyInfo {
    pub slot: u32,
    pub ty: AtomType,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReflectError {
    #[error("no live object {0}")]
    UnknownObject(ObjectHandle),
    #[error("class has no property slot {0}")]
    UnknownSlot(u32),
    #[error("expected {expected}, found {found}")]
    TypeMismatch { expected: AtomType, found: AtomType },
    #[error("{0}")]
    Rejected(String),
}

pub trait Reflect {
    fn find_class(&self, name: &str) -> Option<ClassId>;

    fn class_name(&self, class: ClassId) -> Option<&str>;

    /// Create a new instance with every property at its default.
    fn instantiate(&mut self, class: ClassId) -> Result<ObjectHandle, ReflectError>;

    fn class_of(&self, object: ObjectHandle) -> Option<ClassId>;

    fn find_property(&self, class: ClassId, name: &str) -> Option<PropertyInfo>;

    fn get_property(
        &self,
        object: ObjectHandle,
        property: PropertyInfo,
    ) -> Result<Atom, ReflectError>;

    /// Store `value`. Implementations validate it and may reject it.
    fn set_property(
        &mut self,
        object: ObjectHandle,
        property: PropertyInfo,
        value: Atom,
    ) -> Result<(), ReflectError>;
}

#[cfg(test)]
mod tests;
