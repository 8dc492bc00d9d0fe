use crate::ids::{ClassId, MethodId};
use crate::model::{ClassDef, ClassKind, ClassModel, MethodDef, MethodRecord};

/// In-memory [`ClassModel`] built by hand, used by tests, demos and anything
/// else that does not sit on a real classpath.
///
/// Ids are dense indexes into internal arenas, so lookups are O(1) and the
/// store can be cloned cheaply for what-if edits. `java.lang.Object` is
/// seeded at construction as the universal root.
#[derive(Debug, Clone)]
pub struct TypeStore {
    classes: Vec<ClassDef>,
    methods: Vec<MethodRecord>,
    object: ClassId,
}

impl TypeStore {
    pub fn new() -> Self {
        let mut store = TypeStore {
            classes: Vec::new(),
            methods: Vec::new(),
            object: ClassId::from_raw(0),
        };
        store.object = store.insert_class(ClassDef {
            name: "java.lang.Object".to_string(),
            kind: ClassKind::Class,
            super_class: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
        });
        store
    }

    /// The seeded universal root, `java.lang.Object`.
    #[must_use]
    pub fn object(&self) -> ClassId {
        self.object
    }

    /// Adds a class. `extends = None` means `java.lang.Object`.
    pub fn add_class(
        &mut self,
        name: &str,
        extends: Option<ClassId>,
        interfaces: &[ClassId],
    ) -> ClassId {
        let super_class = extends.unwrap_or(self.object);
        self.insert_class(ClassDef {
            name: name.to_string(),
            kind: ClassKind::Class,
            super_class: Some(super_class),
            interfaces: interfaces.to_vec(),
            methods: Vec::new(),
        })
    }

    /// Adds an interface with the given direct superinterfaces. The
    /// superclass is recorded as `java.lang.Object`, matching class files.
    pub fn add_interface(&mut self, name: &str, extends: &[ClassId]) -> ClassId {
        self.insert_class(ClassDef {
            name: name.to_string(),
            kind: ClassKind::Interface,
            super_class: Some(self.object),
            interfaces: extends.to_vec(),
            methods: Vec::new(),
        })
    }

    /// Appends a declared method to `owner`; declaration order is the call
    /// order.
    pub fn add_method(&mut self, owner: ClassId, def: MethodDef) -> MethodId {
        let id = MethodId::from_raw(self.methods.len() as u32);
        self.methods.push(MethodRecord {
            owner,
            name: def.name,
            signature: def.signature,
            visibility: def.visibility,
            is_static: def.is_static,
            has_body: def.has_body,
        });
        self.classes[owner.idx()].methods.push(id);
        id
    }

    #[must_use]
    pub fn class(&self, class: ClassId) -> &ClassDef {
        &self.classes[class.idx()]
    }

    /// Mutable access for tests that want to edit a hierarchy in place,
    /// e.g. permuting an interface list between runs.
    pub fn class_mut(&mut self, class: ClassId) -> &mut ClassDef {
        &mut self.classes[class.idx()]
    }

    /// All class ids in insertion order.
    pub fn class_ids(&self) -> impl Iterator<Item = ClassId> + '_ {
        (0..self.classes.len()).map(|idx| ClassId::from_raw(idx as u32))
    }

    /// Looks a class up by its fully qualified name.
    #[must_use]
    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|c| c.name == name)
            .map(|idx| ClassId::from_raw(idx as u32))
    }

    fn insert_class(&mut self, def: ClassDef) -> ClassId {
        let id = ClassId::from_raw(self.classes.len() as u32);
        self.classes.push(def);
        id
    }
}

impl Default for TypeStore {
    fn default() -> Self {
        TypeStore::new()
    }
}

impl ClassModel for TypeStore {
    fn class_name(&self, class: ClassId) -> &str {
        &self.classes[class.idx()].name
    }

    fn class_kind(&self, class: ClassId) -> ClassKind {
        self.classes[class.idx()].kind
    }

    fn super_class(&self, class: ClassId) -> Option<ClassId> {
        self.classes[class.idx()].super_class
    }

    fn interfaces(&self, class: ClassId) -> &[ClassId] {
        &self.classes[class.idx()].interfaces
    }

    fn declared_methods(&self, class: ClassId) -> &[MethodId] {
        &self.classes[class.idx()].methods
    }

    fn method(&self, method: MethodId) -> &MethodRecord {
        &self.methods[method.idx()]
    }
}

// === Tests ===
