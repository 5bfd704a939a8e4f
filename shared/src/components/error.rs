use thiserror::Error;

/// Errors that can occur during component registry operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Component kind not registered with the registry
    #[error("Component kind '{kind}' is not registered. Call `ComponentKinds::add()` first")]
    KindNotRegistered {
        kind: String,
    },

    /// The same kind name was registered twice
    #[error("Component kind '{kind}' is already registered")]
    DuplicateKind {
        kind: String,
    },
}
