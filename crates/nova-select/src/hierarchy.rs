//! Generic depth-first walk over a type hierarchy.
//!
//! The walker owns traversal order and per-node lifecycle; algorithms plug in
//! through [`HierarchyVisitor`] and keep whatever per-node state they need in
//! its `NodeData`. Types reachable along several paths are visited once per
//! path occurrence, deliberately: path-sensitive analyses (such as
//! default-method qualification) depend on seeing every occurrence.

use nova_classmodel::{ClassId, ClassModel};

/// One stack frame: a path occurrence of a type, its visitor data, and how
/// far expansion has progressed.
#[derive(Debug)]
struct Node<D> {
    class: ClassId,
    data: D,
    visited: bool,
    super_visited: bool,
    next_interface: usize,
}

impl<D> Node<D> {
    fn new(class: ClassId, data: D) -> Self {
        Node {
            class,
            data,
            visited: false,
            super_visited: false,
            next_interface: 0,
        }
    }
}

/// Walk state handed to [`HierarchyVisitor::visit`].
///
/// Frames themselves stay private: a visitor can observe the current path
/// and request cancellation, but cannot reorder the traversal.
pub struct HierarchyWalk<'m, D> {
    model: &'m dyn ClassModel,
    stack: Vec<Node<D>>,
    cancelled: bool,
}

impl<'m, D> HierarchyWalk<'m, D> {
    fn new(model: &'m dyn ClassModel) -> Self {
        HierarchyWalk {
            model,
            stack: Vec::new(),
            cancelled: false,
        }
    }

    #[must_use]
    pub fn model(&self) -> &'m dyn ClassModel {
        self.model
    }

    /// Number of frames on the current path; 1 while visiting the walk root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The type currently being visited.
    #[must_use]
    pub fn current_class(&self) -> ClassId {
        self.top().class
    }

    /// The type `levels_up` frames above the current one (0 = current).
    #[must_use]
    pub fn class_at(&self, levels_up: usize) -> Option<ClassId> {
        self.frame_at(levels_up).map(|node| node.class)
    }

    #[must_use]
    pub fn current_data(&self) -> &D {
        &self.top().data
    }

    pub fn current_data_mut(&mut self) -> &mut D {
        &mut self.top_mut().data
    }

    /// Visitor data `levels_up` frames above the current one (0 = current).
    #[must_use]
    pub fn data_at(&self, levels_up: usize) -> Option<&D> {
        self.frame_at(levels_up).map(|node| &node.data)
    }

    /// Cooperative stop. After the current callback returns, no further node
    /// is visited and the remaining frames are dropped without
    /// [`HierarchyVisitor::free_node_data`] calls.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    fn frame_at(&self, levels_up: usize) -> Option<&Node<D>> {
        self.stack
            .len()
            .checked_sub(levels_up + 1)
            .map(|idx| &self.stack[idx])
    }

    fn top(&self) -> &Node<D> {
        self.stack
            .last()
            .expect("hierarchy walk observed outside a visit callback")
    }

    fn top_mut(&mut self) -> &mut Node<D> {
        self.stack
            .last_mut()
            .expect("hierarchy walk observed outside a visit callback")
    }
}

/// A hierarchy-shaped analysis run by [`walk_hierarchy`].
pub trait HierarchyVisitor {
    /// Per-node state, created when a frame is pushed and released when it
    /// is popped.
    type NodeData;

    fn make_node_data(&mut self, class: ClassId) -> Self::NodeData;

    /// Called exactly once per popped frame, with that frame's data by
    /// value. Not called for frames abandoned by cancellation.
    fn free_node_data(&mut self, data: Self::NodeData) {
        let _ = data;
    }

    /// Called once per path occurrence, before the node's supertypes are
    /// expanded. Returning `false` prunes the subtree: the node is popped
    /// (and its data freed) without visiting its superclass or interfaces.
    fn visit(&mut self, walk: &mut HierarchyWalk<'_, Self::NodeData>) -> bool;
}

/// Walks `root` and every supertype reachable from it, depth first.
///
/// At each node the superclass is expanded before the interfaces, and
/// interfaces in declared order. No memoization: a type reachable along
/// several paths is visited once per path. Cancellation is checked once per
/// loop iteration, so it takes effect before the next visit or expansion
/// step.
pub fn walk_hierarchy<V: HierarchyVisitor>(model: &dyn ClassModel, root: ClassId, visitor: &mut V) {
    let mut walk = HierarchyWalk::new(model);
    let data = visitor.make_node_data(root);
    walk.stack.push(Node::new(root, data));

    loop {
        if walk.cancelled {
            tracing::trace!(
                target: "nova.select",
                abandoned = walk.stack.len(),
                "hierarchy walk cancelled"
            );
            return;
        }

        let Some(top) = walk.stack.last_mut() else {
            return;
        };
        let class = top.class;

        if !top.visited {
            top.visited = true;
            tracing::trace!(
                target: "nova.select",
                class = model.class_name(class),
                depth = walk.stack.len(),
                "visiting hierarchy node"
            );
            if !visitor.visit(&mut walk) {
                // Prune: make the node look fully expanded so the next
                // iteration pops it.
                let interfaces = model.interfaces(class).len();
                let top = walk.top_mut();
                top.super_visited = true;
                top.next_interface = interfaces;
            }
            continue;
        }

        if !top.super_visited {
            top.super_visited = true;
            if let Some(super_class) = model.super_class(class) {
                let data = visitor.make_node_data(super_class);
                walk.stack.push(Node::new(super_class, data));
            }
            continue;
        }

        let interfaces = model.interfaces(class);
        if top.next_interface < interfaces.len() {
            let interface = interfaces[top.next_interface];
            top.next_interface += 1;
            let data = visitor.make_node_data(interface);
            walk.stack.push(Node::new(interface, data));
            continue;
        }

        if let Some(node) = walk.stack.pop() {
            visitor.free_node_data(node.data);
        }
    }
}

// === Tests ===
