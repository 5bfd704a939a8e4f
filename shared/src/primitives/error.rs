use thiserror::Error;

use crate::primitives::PrimitiveKind;

/// Errors that can occur while normalizing or parsing primitive values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The raw input has a shape the kind cannot normalize (e.g. text given for a float3)
    #[error("Cannot normalize a {shape} as '{kind}'")]
    InvalidInput {
        kind: PrimitiveKind,
        shape: &'static str,
    },

    /// A field reference was supplied to a reference prop of a different kind
    #[error("Field reference of kind '{actual}' cannot be assigned to a '{expected}' prop")]
    RefKindMismatch {
        expected: PrimitiveKind,
        actual: PrimitiveKind,
    },

    /// Wire text could not be read back as the given kind
    #[error("Cannot parse '{text}' as '{kind}'")]
    Unparseable {
        kind: PrimitiveKind,
        text: String,
    },
}
