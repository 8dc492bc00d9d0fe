//! Slot discovery: which erased signatures default-method processing has to
//! consider for a type at all.

use std::collections::HashSet;
use std::fmt;

use nova_classmodel::{ClassId, ClassKind, ClassModel};

use crate::hierarchy::{walk_hierarchy, HierarchyVisitor, HierarchyWalk};
use crate::select::{resolve, Resolution};

/// An erased dispatch slot contributed by some interface in a hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slot {
    pub name: String,
    pub signature: String,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.signature)
    }
}

struct SlotCollector {
    seen: HashSet<Slot>,
    slots: Vec<Slot>,
}

impl HierarchyVisitor for SlotCollector {
    type NodeData = ();

    fn make_node_data(&mut self, _class: ClassId) {}

    fn visit(&mut self, walk: &mut HierarchyWalk<'_, ()>) -> bool {
        let model = walk.model();
        let class = walk.current_class();
        if model.class_kind(class) != ClassKind::Interface {
            return true;
        }
        for &method in model.declared_methods(class) {
            let record = model.method(method);
            if record.is_static || record.is_private() {
                continue;
            }
            let slot = Slot {
                name: record.name.clone(),
                signature: record.signature.clone(),
            };
            if self.seen.insert(slot.clone()) {
                self.slots.push(slot);
            }
        }
        true
    }
}

/// Every slot declared by an interface reachable from `root`, first-seen
/// order, deduplicated. Class-declared signatures do not create slots on
/// their own; they only matter once an interface contributes the slot.
#[must_use]
pub fn default_method_slots(model: &dyn ClassModel, root: ClassId) -> Vec<Slot> {
    let mut collector = SlotCollector {
        seen: HashSet::new(),
        slots: Vec::new(),
    };
    walk_hierarchy(model, root, &mut collector);
    tracing::debug!(
        target: "nova.select",
        root = model.class_name(root),
        slots = collector.slots.len(),
        "collected default-method slots"
    );
    collector.slots
}

/// Resolves every default-method slot of `root`, in slot discovery order.
#[must_use]
pub fn resolve_all(model: &dyn ClassModel, root: ClassId) -> Vec<(Slot, Resolution)> {
    default_method_slots(model, root)
        .into_iter()
        .map(|slot| {
            let resolution = resolve(model, root, &slot.name, &slot.signature);
            (slot, resolution)
        })
        .collect()
}

// === Tests ===

#[cfg(test)]
mod tests {
    use super::*;
    use nova_classmodel::{MethodDef, TypeStore, Visibility};
    use pretty_assertions::assert_eq;

    #[test]
    fn slots_come_from_interfaces_in_discovery_order() {
        // interface I { void m(); int n(); }
        // interface J extends I { void m(); }   (same slot, deduplicated)
        // class R implements J {}
        let mut store = TypeStore::new();
        let i = store.add_interface("I", &[]);
        store.add_method(i, MethodDef::abstract_method("m", "()V"));
        store.add_method(i, MethodDef::abstract_method("n", "()I"));
        let j = store.add_interface("J", &[i]);
        store.add_method(j, MethodDef::concrete("m", "()V"));
        let r = store.add_class("R", None, &[j]);

        let slots = default_method_slots(&store, r);
        let rendered: Vec<String> = slots.iter().map(Slot::to_string).collect();
        // J is visited before I, so its m()V claims the slot first.
        assert_eq!(rendered, vec!["m()V".to_string(), "n()I".to_string()]);
    }

    #[test]
    fn static_and_private_interface_methods_contribute_no_slot() {
        let mut store = TypeStore::new();
        let i = store.add_interface("I", &[]);
        store.add_method(i, MethodDef::concrete("s", "()V").as_static());
        store.add_method(
            i,
            MethodDef::concrete("p", "()V").with_visibility(Visibility::Private),
        );
        let r = store.add_class("R", None, &[i]);

        assert_eq!(default_method_slots(&store, r), Vec::new());
    }

    #[test]
    fn class_declared_methods_do_not_create_slots() {
        let mut store = TypeStore::new();
        let c = store.add_class("C", None, &[]);
        store.add_method(c, MethodDef::concrete("m", "()V"));

        assert_eq!(default_method_slots(&store, c), Vec::new());
    }

    #[test]
    fn resolve_all_covers_every_slot() {
        // interface I { default void m() {} int n(); }
        // class R implements I {}
        let mut store = TypeStore::new();
        let i = store.add_interface("I", &[]);
        let i_m = store.add_method(i, MethodDef::concrete("m", "()V"));
        store.add_method(i, MethodDef::abstract_method("n", "()I"));
        let r = store.add_class("R", None, &[i]);

        let outcomes = resolve_all(&store, r);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].1, Resolution::Target(i_m));
        match &outcomes[1].1 {
            Resolution::Conflict(conflict) => {
                assert_eq!(
                    conflict.kind,
                    crate::family::LinkageErrorKind::AbstractMethodError
                );
            }
            other => panic!("expected a conflict for the abstract slot, got {other:?}"),
        }
    }
}
