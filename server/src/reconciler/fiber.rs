use scenewire_shared::{ElementId, Props};

/// What the reconciler remembers about one mounted element between passes
#[derive(Clone, Debug)]
pub(crate) struct Fiber {
    pub(crate) id: ElementId,
    pub(crate) kind: String,
    pub(crate) key: Option<String>,
    /// Props as last committed, with text content already folded in
    pub(crate) props: Props,
    pub(crate) children: Vec<Fiber>,
}
