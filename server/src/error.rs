use thiserror::Error;

use scenewire_shared::ComponentError;

/// Fatal errors that abort a render pass.
///
/// These are programming errors in the authored element tree. The pass that
/// hit one emits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// An element named a component kind the registry does not know
    #[error("{0}")]
    UnknownKind(#[from] ComponentError),

    /// Literal text appeared under a kind that cannot hold text content
    #[error("Component '{kind}' cannot contain text. Wrap text in a text element")]
    IllegalText {
        kind: String,
    },

    /// Child elements appeared under a kind without the child marker
    #[error("Component '{kind}' cannot host child components")]
    ChildrenNotAllowed {
        kind: String,
    },

    /// The tree kept changing for the configured maximum number of passes
    #[error("Render did not settle after {passes} passes")]
    Unstable {
        passes: usize,
    },
}
