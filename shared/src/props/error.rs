use thiserror::Error;

use crate::primitives::{PrimitiveError, PrimitiveKind};

/// Errors that can occur while building prop factories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropError {
    /// Reference kinds point at live instances and cannot carry a static default
    #[error("Prop of kind '{kind}' cannot have a default value")]
    DefaultNotAllowed {
        kind: PrimitiveKind,
    },

    /// Only reference kinds can produce field references
    #[error("Prop of kind '{kind}' is not a reference kind and cannot produce a FieldRef")]
    NotAReference {
        kind: PrimitiveKind,
    },

    /// The supplied default does not normalize under the prop's kind
    #[error("Invalid default value: {0}")]
    InvalidDefault(#[from] PrimitiveError),
}
