//! Scope environment for evaluation.
//!
//! A [`Transaction`] is one content load: the global bindings made with
//! `export` and the reflection registry objects are created in. Contexts
//! borrow it; it outlives all of them.
//!
//! A [`ParseContext`] is one scope: the top level of a load, or the body
//! of one object literal. It owns its local bindings, links to its parent
//! without owning it, and knows the object its body is populating. Lookup
//! walks the local chain outward, then the transaction's globals, so a
//! binding made in one object body is invisible to its siblings.

use std::cell::RefCell;

use dcl_ir::{Atom, ObjectHandle};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::errors::{
    invalid_member, not_an_object, null_reference, property_rejected, unknown_class, EvalError,
    EvalResult,
};
use crate::promotion::convert;
use crate::reflect::{ClassId, PropertyInfo, Reflect};

pub struct Transaction {
    globals: RefCell<FxHashMap<String, Atom>>,
    registry: RefCell<Box<dyn Reflect>>,
}

impl Transaction {
    pub fn new(registry: impl Reflect + 'static) -> Self {
        Transaction {
            globals: RefCell::new(FxHashMap::default()),
            registry: RefCell::new(Box::new(registry)),
        }
    }

    pub fn global(&self, name: &str) -> Option<Atom> {
        self.globals.borrow().get(name).cloned()
    }

    /// Bind `name` for every context of this transaction.
    pub fn export(&self, name: &str, value: Atom) {
        debug!(name, value = %value.to_source(), "export");
        self.globals.borrow_mut().insert(name.to_string(), value);
    }

    /// All global bindings, sorted by name.
    pub fn globals(&self) -> Vec<(String, Atom)> {
        let mut globals: Vec<_> = self
            .globals
            .borrow()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        globals.sort_by(|a, b| a.0.cmp(&b.0));
        globals
    }

    /// Instantiate the class registered as `class`.
    pub fn instantiate(&self, class: &str) -> Result<ObjectHandle, EvalError> {
        let mut registry = self.registry.borrow_mut();
        let id = registry.find_class(class).ok_or_else(|| unknown_class(class))?;
        let object = registry
            .instantiate(id)
            .map_err(|e| property_rejected(class, e))?;
        debug!(class, %object, "constructing object");
        Ok(object)
    }

    /// Name of the class `object` was instantiated from.
    pub fn class_name(&self, object: ObjectHandle) -> Option<String> {
        let registry = self.registry.borrow();
        let class = registry.class_of(object)?;
        registry.class_name(class).map(str::to_string)
    }

    /// Read `member` from the object `target` refers to.
    pub fn read_member(&self, target: &Atom, member: &str) -> EvalResult {
        let object = match target {
            Atom::Object(Some(object)) => *object,
            Atom::Object(None) => return Err(null_reference()),
            other => return Err(not_an_object(other.ty())),
        };
        let registry = self.registry.borrow();
        let property = resolve(&**registry, object, member)?;
        registry
            .get_property(object, property)
            .map_err(|e| property_rejected(member, e))
    }

    /// Convert `value` to the declared type of `property` and store it.
    pub fn assign(&self, object: ObjectHandle, property: &str, value: &Atom) -> Result<(), EvalError> {
        let mut registry = self.registry.borrow_mut();
        let info = resolve(&**registry, object, property)?;
        let value = convert(value, info.ty)?;
        registry
            .set_property(object, info, value)
            .map_err(|e| property_rejected(property, e))
    }
}

fn resolve(
    registry: &dyn Reflect,
    object: ObjectHandle,
    member: &str,
) -> Result<PropertyInfo, EvalError> {
    let class = registry
        .class_of(object)
        .ok_or_else(|| invalid_member(&object.to_string(), member))?;
    registry
        .find_property(class, member)
        .ok_or_else(|| invalid_member(&class_label(registry, class), member))
}

fn class_label(registry: &dyn Reflect, class: ClassId) -> String {
    registry
        .class_name(class)
        .map_or_else(|| format!("class {}", class.index()), str::to_string)
}

pub struct ParseContext<'p> {
    parent: Option<&'p ParseContext<'p>>,
    transaction: &'p Transaction,
    locals: FxHashMap<String, Atom>,
    scope_object: Option<ObjectHandle>,
}

impl<'p> ParseContext<'p> {
    /// A top-level context with no bindings and no current object.
    pub fn new(transaction: &'p Transaction) -> Self {
        Self::with_locals(transaction, FxHashMap::default())
    }

    /// A top-level context seeded with `locals`, as left behind by
    /// [`ParseContext::into_locals`].
    pub fn with_locals(transaction: &'p Transaction, locals: FxHashMap<String, Atom>) -> Self {
        ParseContext {
            parent: None,
            transaction,
            locals,
            scope_object: None,
        }
    }

    /// A scope for the body of an object literal populating `object`.
    pub fn child<'c>(&'c self, object: ObjectHandle) -> ParseContext<'c> {
        ParseContext {
            parent: Some(self),
            transaction: self.transaction,
            locals: FxHashMap::default(),
            scope_object: Some(object),
        }
    }

    pub fn into_locals(self) -> FxHashMap<String, Atom> {
        self.locals
    }

    pub fn transaction(&self) -> &'p Transaction {
        self.transaction
    }

    /// The object being populated by the enclosing object literal body.
    pub fn scope_object(&self) -> Option<ObjectHandle> {
        self.scope_object
    }

    /// Resolve `name`: this scope, then each enclosing scope, then globals.
    pub fn lookup(&self, name: &str) -> Option<Atom> {
        let mut scope = Some(self);
        while let Some(context) = scope {
            if let Some(value) = context.locals.get(name) {
                return Some(value.clone());
            }
            scope = context.parent;
        }
        self.transaction.global(name)
    }

    /// Bind `name` in this scope only.
    pub fn define_local(&mut self, name: &str, value: Atom) {
        self.locals.insert(name.to_string(), value);
    }

    pub fn export_global(&self, name: &str, value: Atom) {
        self.transaction.export(name, value);
    }
}
