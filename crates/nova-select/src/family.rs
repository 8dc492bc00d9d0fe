//! Method families: every same-signature candidate discovered across one
//! hierarchy walk, tagged with whether it is still eligible for selection.

use nova_classmodel::{ClassModel, MethodId};
use thiserror::Error;

/// Standing of one family member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Qualification {
    /// Still a valid selection candidate.
    Qualified,
    /// Shadowed by a more derived declaration on some path through the
    /// hierarchy.
    Disqualified,
}

/// The linkage error class an unresolvable family maps to, mirroring what
/// the VM would throw when the selected slot is invoked (JVMS 5.4.3.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkageErrorKind {
    /// No qualified candidate has a body.
    #[error("AbstractMethodError")]
    AbstractMethodError,
    /// Several qualified candidates have bodies and none is more specific.
    #[error("IncompatibleClassChangeError")]
    IncompatibleClassChangeError,
}

/// An unresolvable selection, carried as a value: expected outcomes like
/// ambiguity are data, not process errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: LinkageErrorKind,
    /// Diagnostic text; for ambiguity, one line per qualified candidate.
    pub detail: String,
}

/// Accumulates candidates for one erased (name, signature) slot in discovery
/// order.
///
/// States only move one way. A member recorded as disqualified never becomes
/// qualified again, and re-recording a qualified member is a no-op; order of
/// first discovery is what diagnostics report.
#[derive(Debug, Default)]
pub struct MethodFamily {
    members: Vec<(MethodId, Qualification)>,
    selected_target: Option<MethodId>,
    conflict: Option<Conflict>,
}

impl MethodFamily {
    pub fn record_qualified_method(&mut self, method: MethodId) {
        if self.position(method).is_none() {
            self.members.push((method, Qualification::Qualified));
        }
    }

    /// Disqualification wins over any previously recorded standing.
    pub fn record_disqualified_method(&mut self, method: MethodId) {
        match self.position(method) {
            Some(pos) => self.members[pos].1 = Qualification::Disqualified,
            None => self.members.push((method, Qualification::Disqualified)),
        }
    }

    /// Pins the outcome to a class-declared method. First writer wins; once
    /// a target or conflict exists the family is settled and later calls are
    /// no-ops.
    pub fn set_target_if_empty(&mut self, method: MethodId) {
        if self.selected_target.is_none() && self.conflict.is_none() {
            self.selected_target = Some(method);
        }
    }

    #[must_use]
    pub fn selected_target(&self) -> Option<MethodId> {
        self.selected_target
    }

    #[must_use]
    pub fn conflict(&self) -> Option<&Conflict> {
        self.conflict.as_ref()
    }

    /// Whether `method` was recorded with any standing. Diagnostic helper;
    /// selection itself never needs it.
    #[must_use]
    pub fn contains(&self, method: MethodId) -> bool {
        self.position(method).is_some()
    }

    /// Members in discovery order with their final standing.
    pub fn members(&self) -> impl Iterator<Item = (MethodId, Qualification)> + '_ {
        self.members.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn position(&self, method: MethodId) -> Option<usize> {
        self.members.iter().position(|&(m, _)| m == method)
    }

    /// Settles the family after a walk: exactly one qualified member with a
    /// body becomes the target; zero is an `AbstractMethodError`; more than
    /// one is an `IncompatibleClassChangeError` naming every qualified
    /// candidate. Idempotent, and a no-op when a class-declared target
    /// already won.
    pub fn determine_target(&mut self, model: &dyn ClassModel) {
        if self.selected_target.is_some() || self.conflict.is_some() {
            return;
        }

        let mut defaults = 0usize;
        let mut last_default = None;
        for (idx, &(method, qualification)) in self.members.iter().enumerate() {
            if qualification == Qualification::Qualified && model.method(method).has_body {
                defaults += 1;
                last_default = Some(idx);
            }
        }

        match (defaults, last_default) {
            (1, Some(idx)) => self.selected_target = Some(self.members[idx].0),
            (0, _) => {
                self.conflict = Some(Conflict {
                    kind: LinkageErrorKind::AbstractMethodError,
                    detail: "no qualifying default method found".to_string(),
                });
            }
            _ => {
                let candidates: Vec<String> = self
                    .members
                    .iter()
                    .filter(|&&(_, q)| q == Qualification::Qualified)
                    .map(|&(m, _)| model.method_display(m))
                    .collect();
                self.conflict = Some(Conflict {
                    kind: LinkageErrorKind::IncompatibleClassChangeError,
                    detail: candidates.join("\n"),
                });
            }
        }
    }
}

// === Tests ===
