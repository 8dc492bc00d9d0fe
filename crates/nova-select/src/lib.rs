//! Default-method selection over Java class hierarchies.
//!
//! Given a type and an erased method signature, decide which declaration a
//! virtual call binds to once superclasses and superinterfaces are in play:
//! a unique most-derived default, a class method that beats all defaults, or
//! one of the two linkage errors (`AbstractMethodError` when nothing
//! selectable is left, `IncompatibleClassChangeError` when several defaults
//! survive). The same generic walker also backs slot discovery and the
//! hierarchy printer.

#![forbid(unsafe_code)]

mod family;
mod hierarchy;
mod print;
mod select;
mod slots;

pub use crate::family::{Conflict, LinkageErrorKind, MethodFamily, Qualification};
pub use crate::hierarchy::{walk_hierarchy, HierarchyVisitor, HierarchyWalk};
pub use crate::print::print_hierarchy;
pub use crate::select::{resolve, Resolution};
pub use crate::slots::{default_method_slots, resolve_all, Slot};
