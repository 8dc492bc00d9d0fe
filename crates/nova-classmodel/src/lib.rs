//! Class and interface metadata consumed by the method-selection engine.
//!
//! The crate deliberately knows nothing about where a hierarchy comes from.
//! [`ClassModel`] is the read-only trait the algorithms walk; [`TypeStore`]
//! is the hand-built arena implementation used by tests and demos. Richer
//! backends (classpath indexes, stub readers) implement the same trait.

#![forbid(unsafe_code)]

mod ids;
mod model;
mod store;

pub use crate::ids::{ClassId, MethodId};
pub use crate::model::{ClassDef, ClassKind, ClassModel, MethodDef, MethodRecord, Visibility};
pub use crate::store::TypeStore;
