//! Default-method selection: which declaration a virtual call binds to once
//! class inheritance has had its say.
//!
//! The walk visits every path occurrence of every supertype. Class-declared
//! methods pin the outcome immediately (class inheritance always beats
//! interface defaults, JVMS 5.4.3.3); interface declarations are accumulated
//! in a [`MethodFamily`] under a single mutable qualification state that is
//! flipped to disqualified whenever a declaration is found, and restored from
//! per-node undo scopes as the walk backs out, so sibling branches see the
//! state they started from.

use nova_classmodel::{ClassId, ClassKind, ClassModel, MethodId};

use crate::family::{Conflict, MethodFamily, Qualification};
use crate::hierarchy::{walk_hierarchy, HierarchyVisitor, HierarchyWalk};

/// Outcome of resolving one `(root, name, signature)` query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A unique declaration was selected.
    Target(MethodId),
    /// Candidates were found but none is selectable, or too many are.
    Conflict(Conflict),
    /// Nothing in the hierarchy declares the requested name and signature.
    /// Distinct from `Conflict`: here there was never a family at all.
    NoMatch,
}

/// The family under construction plus the walk's single mutable
/// qualification state.
#[derive(Debug)]
struct StatefulFamily {
    family: MethodFamily,
    state: Qualification,
}

impl StatefulFamily {
    fn new() -> Self {
        StatefulFamily {
            family: MethodFamily::default(),
            state: Qualification::Qualified,
        }
    }

    /// Records `method` under the current state, then disqualifies
    /// everything found further up the same path. Returns the pre-call state
    /// as the restore token for the recording node's undo scope.
    fn record_method_and_disqualify_rest(&mut self, method: MethodId) -> Qualification {
        let token = self.state;
        match self.state {
            Qualification::Qualified => self.family.record_qualified_method(method),
            Qualification::Disqualified => self.family.record_disqualified_method(method),
        }
        self.state = Qualification::Disqualified;
        token
    }

    fn restore(&mut self, token: Qualification) {
        self.state = token;
    }
}

/// Per-node undo scope: the restore tokens minted while this node was on the
/// stack, replayed when the walker pops it.
#[derive(Debug, Default)]
struct QualificationScope {
    marks: Vec<Qualification>,
}

impl QualificationScope {
    fn add_mark(&mut self, token: Qualification) {
        self.marks.push(token);
    }
}

struct DefaultMethodSelector<'a> {
    model: &'a dyn ClassModel,
    name: &'a str,
    signature: &'a str,
    /// Created lazily by the first match, so "no family" stays observable.
    family: Option<StatefulFamily>,
}

impl DefaultMethodSelector<'_> {
    fn family_mut(&mut self) -> &mut StatefulFamily {
        self.family.get_or_insert_with(StatefulFamily::new)
    }
}

impl HierarchyVisitor for DefaultMethodSelector<'_> {
    type NodeData = QualificationScope;

    fn make_node_data(&mut self, _class: ClassId) -> QualificationScope {
        QualificationScope::default()
    }

    fn free_node_data(&mut self, scope: QualificationScope) {
        if let Some(family) = &mut self.family {
            for token in scope.marks {
                family.restore(token);
            }
        }
    }

    fn visit(&mut self, walk: &mut HierarchyWalk<'_, QualificationScope>) -> bool {
        let class = walk.current_class();
        let Some(method) = self
            .model
            .find_declared_method(class, self.name, self.signature)
        else {
            return true;
        };

        // Static and private declarations never take part in inheritance.
        let record = self.model.method(method);
        if record.is_static || record.is_private() {
            return true;
        }

        match self.model.class_kind(class) {
            ClassKind::Class => {
                tracing::debug!(
                    target: "nova.select",
                    method = %self.model.method_display(method),
                    "class-declared method preempts default resolution"
                );
                self.family_mut().family.set_target_if_empty(method);
            }
            ClassKind::Interface => {
                let token = self.family_mut().record_method_and_disqualify_rest(method);
                walk.current_data_mut().add_mark(token);
                tracing::trace!(
                    target: "nova.select",
                    method = %self.model.method_display(method),
                    qualification = ?token,
                    "recorded default-method candidate"
                );
            }
        }

        true
    }
}

/// Runs the walk and hands back the settled family, or `None` when nothing
/// in the hierarchy matched.
fn run_selection(
    model: &dyn ClassModel,
    root: ClassId,
    name: &str,
    signature: &str,
) -> Option<MethodFamily> {
    let mut selector = DefaultMethodSelector {
        model,
        name,
        signature,
        family: None,
    };
    walk_hierarchy(model, root, &mut selector);

    let mut family = selector.family?.family;
    family.determine_target(model);
    Some(family)
}

/// Resolves which declaration a virtual call on `root` binds to for the
/// erased `name` and `signature`.
///
/// Total over well-formed inputs: ambiguity and abstract-only families come
/// back as [`Resolution::Conflict`] values. Rerunning the query on an
/// unchanged model returns the same outcome; the walk carries no state
/// across calls.
pub fn resolve(model: &dyn ClassModel, root: ClassId, name: &str, signature: &str) -> Resolution {
    let Some(family) = run_selection(model, root, name, signature) else {
        tracing::debug!(
            target: "nova.select",
            root = model.class_name(root),
            name,
            signature,
            "no declaration found in hierarchy"
        );
        return Resolution::NoMatch;
    };

    if let Some(target) = family.selected_target() {
        tracing::debug!(
            target: "nova.select",
            root = model.class_name(root),
            method = %model.method_display(target),
            "resolved call target"
        );
        return Resolution::Target(target);
    }

    let conflict = family
        .conflict()
        .cloned()
        .expect("settled family carries a target or a conflict");
    tracing::debug!(
        target: "nova.select",
        root = model.class_name(root),
        kind = %conflict.kind,
        "selection conflict"
    );
    Resolution::Conflict(conflict)
}

// === Tests ===
