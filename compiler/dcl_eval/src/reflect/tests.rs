use super::*;
use pretty_assertions::assert_eq;

fn registry() -> Registry {
    Registry::new()
        .with_class(
            ClassDef::new("Light")
                .property("intensity", AtomType::Float, 1.0)
                .property("on", AtomType::Bool, true),
        )
        .with_class(ClassDef::new("Empty"))
}

#[test]
fn classes_resolve_by_name() {
    let registry = registry();
    let light = registry.find_class("Light");
    assert_eq!(light, Some(ClassId::new(0)));
    assert_eq!(light.and_then(|c| registry.class_name(c)), Some("Light"));
    assert_eq!(registry.find_class("Camera"), None);
}

#[test]
fn new_instances_hold_defaults() {
    let mut registry = registry();
    let class = registry.find_class("Light").unwrap_or_else(|| panic!("no Light"));
    let object = registry
        .instantiate(class)
        .unwrap_or_else(|e| panic!("{e}"));
    let intensity = registry
        .find_property(class, "intensity")
        .unwrap_or_else(|| panic!("no intensity"));

    assert_eq!(intensity.ty, AtomType::Float);
    assert_eq!(registry.get_property(object, intensity), Ok(Atom::Float(1.0)));
    assert_eq!(registry.class_of(object), Some(class));
    assert_eq!(registry.class_of(ObjectHandle::new(1)), None);
}

#[test]
fn set_property_validates_type() {
    let mut registry = registry();
    let class = registry.find_class("Light").unwrap_or_else(|| panic!("no Light"));
    let object = registry
        .instantiate(class)
        .unwrap_or_else(|e| panic!("{e}"));
    let on = registry
        .find_property(class, "on")
        .unwrap_or_else(|| panic!("no on"));

    assert_eq!(
        registry.set_property(object, on, Atom::Int(0)),
        Err(ReflectError::TypeMismatch {
            expected: AtomType::Bool,
            found: AtomType::Int,
        })
    );
    assert_eq!(registry.set_property(object, on, Atom::Bool(false)), Ok(()));
    assert_eq!(registry.get_property(object, on), Ok(Atom::Bool(false)));
}

#[test]
fn unknown_members_and_objects() {
    let mut registry = registry();
    let empty = registry.find_class("Empty").unwrap_or_else(|| panic!("no Empty"));
    assert_eq!(registry.find_property(empty, "intensity"), None);

    let ghost = ObjectHandle::new(7);
    let info = PropertyInfo {
        slot: 0,
        ty: AtomType::Int,
    };
    assert_eq!(registry.class_of(ghost), None);
    assert_eq!(
        registry.set_property(ghost, info, Atom::Int(1)),
        Err(ReflectError::UnknownObject(ghost))
    );
}

#[test]
fn reregistering_a_name_replaces_it() {
    let mut registry = registry();
    let second = registry.register(ClassDef::new("Light").property("lumens", AtomType::Int, 0_i64));
    assert_eq!(registry.find_class("Light"), Some(second));
    assert!(registry.find_property(second, "lumens").is_some());
    assert!(registry.find_property(second, "intensity").is_none());
}
