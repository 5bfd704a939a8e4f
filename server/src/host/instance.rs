use std::collections::HashMap;

use scenewire_shared::{ElementId, FieldRefs};

use crate::element::EventHandler;

/// A live node in the reconciled tree.
///
/// Parent and children are recorded by id; instances never own each other.
/// The updater is looked up by `kind` in the container's registry.
pub struct Instance {
    pub(crate) id: ElementId,
    pub(crate) kind: String,
    pub(crate) refs: FieldRefs,
    pub(crate) parent: Option<ElementId>,
    pub(crate) children: Vec<ElementId>,
    pub(crate) handlers: HashMap<String, EventHandler>,
}

impl Instance {
    pub(crate) fn new(id: ElementId, kind: &str, refs: FieldRefs) -> Self {
        Self {
            id,
            kind: kind.to_string(),
            refs,
            parent: None,
            children: Vec::new(),
            handlers: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn refs(&self) -> &FieldRefs {
        &self.refs
    }

    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub fn has_handler(&self, event: &str) -> bool {
        self.handlers.contains_key(event)
    }
}
