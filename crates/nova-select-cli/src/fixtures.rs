//! Built-in demo hierarchies.

use nova_classmodel::{ClassId, MethodDef, TypeStore};

pub struct Fixture {
    pub name: &'static str,
    pub description: &'static str,
    pub store: TypeStore,
    pub root: ClassId,
}

/// ```java
/// interface I1 { default void m() {} }
/// interface I2 { default void m() {} }
/// interface J extends I1, I2 { default void m() {} }
/// class R implements J {}
/// ```
///
/// J's override is the unique most derived default, so the diamond resolves
/// without a conflict.
pub fn diamond_override() -> Fixture {
    let mut store = TypeStore::new();
    let i1 = store.add_interface("I1", &[]);
    store.add_method(i1, MethodDef::concrete("m", "()V"));
    let i2 = store.add_interface("I2", &[]);
    store.add_method(i2, MethodDef::concrete("m", "()V"));
    let j = store.add_interface("J", &[i1, i2]);
    store.add_method(j, MethodDef::concrete("m", "()V"));
    let root = store.add_class("R", None, &[j]);
    Fixture {
        name: "diamond-override",
        description: "diamond of defaults resolved by an override in the joining interface",
        store,
        root,
    }
}

/// ```java
/// interface I1 { default void m() {} }
/// interface I2 { default void m() {} }
/// class C { public void m() {} }
/// class R extends C implements I1, I2 {}
/// ```
///
/// The superclass method wins outright; the conflicting defaults never get
/// a say.
pub fn class_wins() -> Fixture {
    let mut store = TypeStore::new();
    let i1 = store.add_interface("I1", &[]);
    store.add_method(i1, MethodDef::concrete("m", "()V"));
    let i2 = store.add_interface("I2", &[]);
    store.add_method(i2, MethodDef::concrete("m", "()V"));
    let c = store.add_class("C", None, &[]);
    store.add_method(c, MethodDef::concrete("m", "()V"));
    let root = store.add_class("R", Some(c), &[i1, i2]);
    Fixture {
        name: "class-wins",
        description: "superclass method preempting two conflicting interface defaults",
        store,
        root,
    }
}

pub fn all() -> Vec<Fixture> {
    vec![diamond_override(), class_wins()]
}

pub fn by_name(name: &str) -> Option<Fixture> {
    all().into_iter().find(|fixture| fixture.name == name)
}
