use dcl_ir::{Atom, AtomType, ObjectHandle};
use rustc_hash::FxHashMap;
use tracing::trace;

use super::{ClassId, PropertyInfo, Reflect, ReflectError};

/// A class: a name and its typed properties.
///
/// ```ignore
/// let light = ClassDef::new("Light")
///     .property("intensity", AtomType::Float, 1.0)
///     .property("on", AtomType::Bool, true);
/// ```
#[derive(Clone, Debug)]
pub struct ClassDef {
    name: String,
    properties: Vec<PropertyDef>,
}

#[derive(Clone, Debug)]
struct PropertyDef {
    name: String,
    ty: AtomType,
    default: Atom,
}

impl ClassDef {
    pub fn new(name: impl Into<String>) -> Self {
        ClassDef {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    /// Add a property. A later property with the same name shadows an
    /// earlier one.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, ty: AtomType, default: impl Into<Atom>) -> Self {
        self.properties.push(PropertyDef {
            name: name.into(),
            ty,
            default: default.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
struct Instance {
    class: ClassId,
    values: Vec<Atom>,
}

/// In-memory classes and the objects instantiated from them.
#[derive(Debug, Default)]
pub struct Registry {
    classes: Vec<ClassDef>,
    by_name: FxHashMap<String, ClassId>,
    objects: Vec<Instance>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Registry::register`].
    #[must_use]
    pub fn with_class(mut self, class: ClassDef) -> Self {
        self.register(class);
        self
    }

    /// Add a class; registering a name again replaces it for later lookups.
    pub fn register(&mut self, class: ClassDef) -> ClassId {
        let id = ClassId::new(u32::try_from(self.classes.len()).unwrap_or(u32::MAX));
        self.by_name.insert(class.name.clone(), id);
        self.classes.push(class);
        id
    }

    fn class(&self, class: ClassId) -> Option<&ClassDef> {
        self.classes.get(class.index())
    }

    fn instance(&self, object: ObjectHandle) -> Result<&Instance, ReflectError> {
        self.objects
            .get(object.index())
            .ok_or(ReflectError::UnknownObject(object))
    }
}

impl Reflect for Registry {
    fn find_class(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    fn class_name(&self, class: ClassId) -> Option<&str> {
        self.class(class).map(ClassDef::name)
    }

    fn instantiate(&mut self, class: ClassId) -> Result<ObjectHandle, ReflectError> {
        let values = self
            .class(class)
            .map(|def| def.properties.iter().map(|p| p.default.clone()).collect())
            .ok_or_else(|| ReflectError::Rejected(format!("no class with id {}", class.index())))?;
        let handle = ObjectHandle::new(
            u32::try_from(self.objects.len())
                .map_err(|_| ReflectError::Rejected("object store is full".to_string()))?,
        );
        self.objects.push(Instance { class, values });
        trace!(object = %handle, "instantiated");
        Ok(handle)
    }

    fn class_of(&self, object: ObjectHandle) -> Option<ClassId> {
        self.objects.get(object.index()).map(|instance| instance.class)
    }

    fn find_property(&self, class: ClassId, name: &str) -> Option<PropertyInfo> {
        let def = self.class(class)?;
        let (slot, property) = def
            .properties
            .iter()
            .enumerate()
            .rev()
            .find(|(_, p)| p.name == name)?;
        Some(PropertyInfo {
            slot: u32::try_from(slot).ok()?,
            ty: property.ty,
        })
    }

    fn get_property(
        &self,
        object: ObjectHandle,
        property: PropertyInfo,
    ) -> Result<Atom, ReflectError> {
        self.instance(object)?
            .values
            .get(property.slot as usize)
            .cloned()
            .ok_or(ReflectError::UnknownSlot(property.slot))
    }

    fn set_property(
        &mut self,
        object: ObjectHandle,
        property: PropertyInfo,
        value: Atom,
    ) -> Result<(), ReflectError> {
        if value.ty() != property.ty {
            return Err(ReflectError::TypeMismatch {
                expected: property.ty,
                found: value.ty(),
            });
        }
        let slot = self
            .objects
            .get_mut(object.index())
            .ok_or(ReflectError::UnknownObject(object))?
            .values
            .get_mut(property.slot as usize)
            .ok_or(ReflectError::UnknownSlot(property.slot))?;
        *slot = value;
        Ok(())
    }
}
