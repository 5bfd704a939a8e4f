use std::fmt;

use crate::primitives::PrimitiveKind;

/// Names one output slot of one live instance.
///
/// A `FieldRef` is a non-owning back-reference: it holds the target's id and
/// the output name, never a handle to the instance itself. Resolving it to a
/// live value is the host's job, and the target may be removed independently.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub kind: PrimitiveKind,
    pub element_id: String,
    pub name: String,
}

impl FieldRef {
    pub fn new(
        kind: PrimitiveKind,
        element_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            element_id: element_id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element_id, self.name)
    }
}
