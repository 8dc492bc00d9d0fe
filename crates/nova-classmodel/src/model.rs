use crate::ids::{ClassId, MethodId};

/// Whether a type is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Declared access level of a method.
///
/// Only `Private` matters to method selection (private methods never take
/// part in inheritance, JLS 8.4.8); the other variants are carried so a
/// model can round-trip what its source declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    Package,
    Private,
}

/// A method declaration handed to [`crate::TypeStore::add_method`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDef {
    pub name: String,
    /// Erased descriptor, e.g. `()V` or `(Ljava/lang/String;)I`.
    pub signature: String,
    pub visibility: Visibility,
    pub is_static: bool,
    /// Whether the declaration carries a body. On an interface this is the
    /// default-method marker; abstract methods have no body.
    pub has_body: bool,
}

impl MethodDef {
    /// Public instance method with a body: a concrete class method, or a
    /// default method when declared on an interface.
    pub fn concrete(name: impl Into<String>, signature: impl Into<String>) -> Self {
        MethodDef {
            name: name.into(),
            signature: signature.into(),
            visibility: Visibility::Public,
            is_static: false,
            has_body: true,
        }
    }

    /// Public instance method without a body.
    pub fn abstract_method(name: impl Into<String>, signature: impl Into<String>) -> Self {
        MethodDef {
            has_body: false,
            ..MethodDef::concrete(name, signature)
        }
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    #[must_use]
    pub fn as_static(mut self) -> Self {
        self.is_static = true;
        self
    }
}

/// A stored method together with its declaring type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub owner: ClassId,
    pub name: String,
    pub signature: String,
    pub visibility: Visibility,
    pub is_static: bool,
    pub has_body: bool,
}

impl MethodRecord {
    #[must_use]
    pub fn matches_signature(&self, name: &str, signature: &str) -> bool {
        self.name == name && self.signature == signature
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }
}

/// A class or interface record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: String,
    pub kind: ClassKind,
    /// `None` only for the universal root, `java.lang.Object`. Interfaces
    /// report the root as their superclass, the way class files do.
    pub super_class: Option<ClassId>,
    /// Direct superinterfaces in declared order.
    pub interfaces: Vec<ClassId>,
    /// Declared methods in declaration order.
    pub methods: Vec<MethodId>,
}

/// Read-only view of a resolved type hierarchy.
///
/// Every accessor is total over the ids the model has handed out: passing a
/// foreign id is a caller bug and may panic. Implementations must answer
/// deterministically for the duration of an algorithm run; none of the
/// consumers memoize across calls.
pub trait ClassModel {
    fn class_name(&self, class: ClassId) -> &str;

    fn class_kind(&self, class: ClassId) -> ClassKind;

    /// Direct superclass; `None` only for the universal root type.
    fn super_class(&self, class: ClassId) -> Option<ClassId>;

    /// Direct superinterfaces in declared order.
    fn interfaces(&self, class: ClassId) -> &[ClassId];

    /// Declared methods in declaration order.
    fn declared_methods(&self, class: ClassId) -> &[MethodId];

    fn method(&self, method: MethodId) -> &MethodRecord;

    /// First method declared on `class` matching `name` and the erased
    /// `signature`. Declaration order breaks ties.
    fn find_declared_method(
        &self,
        class: ClassId,
        name: &str,
        signature: &str,
    ) -> Option<MethodId> {
        self.declared_methods(class)
            .iter()
            .copied()
            .find(|&m| self.method(m).matches_signature(name, signature))
    }

    /// Display form used in diagnostics, e.g. `java.util.List.size()I`.
    fn method_display(&self, method: MethodId) -> String {
        let m = self.method(method);
        format!("{}.{}{}", self.class_name(m.owner), m.name, m.signature)
    }
}
