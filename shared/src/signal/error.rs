use thiserror::Error;

/// Errors that can occur while parsing wire text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// The signal type prefix is not one this side understands
    #[error("Unknown signal type '{prefix}'")]
    UnknownSignal {
        prefix: String,
    },

    /// A required field of a signal was missing or empty
    #[error("Signal '{signal}' is missing field '{field}'")]
    MissingField {
        signal: &'static str,
        field: &'static str,
    },

    /// A signal carried more fields than its format allows
    #[error("Signal '{signal}' has unexpected trailing fields")]
    TrailingFields {
        signal: &'static str,
    },

    /// A prop update token was not of the form `prop=type=value`
    #[error("Malformed prop update '{token}'")]
    MalformedProp {
        token: String,
    },

    /// A prop update named a primitive type that does not exist
    #[error("Unknown primitive type '{name}'")]
    UnknownPrimitive {
        name: String,
    },

    /// A signal batch did not end with the batch terminator
    #[error("Signal batch is missing its '|' terminator")]
    MissingTerminator,
}
