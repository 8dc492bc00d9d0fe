//! Hierarchy pretty-printer, mainly for debugging walk order by eye.

use std::fmt::Write as _;

use nova_classmodel::{ClassId, ClassModel};

use crate::hierarchy::{walk_hierarchy, HierarchyVisitor, HierarchyWalk};

struct PrintHierarchy {
    out: String,
}

impl HierarchyVisitor for PrintHierarchy {
    type NodeData = ();

    fn make_node_data(&mut self, _class: ClassId) {}

    fn visit(&mut self, walk: &mut HierarchyWalk<'_, ()>) -> bool {
        let indent = (walk.depth() - 1) * 2;
        let name = walk.model().class_name(walk.current_class());
        let _ = writeln!(self.out, "{:indent$}{name}", "");
        true
    }
}

/// Renders the hierarchy of `root` in visit order, one line per node,
/// indented two spaces per level. Types reachable along several paths appear
/// once per path, exactly as the walker sees them.
#[must_use]
pub fn print_hierarchy(model: &dyn ClassModel, root: ClassId) -> String {
    let mut printer = PrintHierarchy { out: String::new() };
    walk_hierarchy(model, root, &mut printer);
    printer.out
}

// === Tests ===
