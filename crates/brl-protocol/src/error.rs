use thiserror::Error;

/// Errors produced while parsing an invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The operation name matches nothing in the dispatch table.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// The operation exists but was given the wrong number of arguments.
    #[error("operation {function} expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        function: String,
        expected: usize,
        actual: usize,
    },
}

/// Result alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
