use thiserror::Error;

/// Errors from key/value store operations.
///
/// Absence of a key is not an error: `get` reports it as `Ok(None)` so that
/// callers can tell "never written" apart from a transport failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to complete a get or put for the given key.
    #[error("transport error on key {key}: {reason}")]
    Transport { key: String, reason: String },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backend is in an unusable state (e.g. a poisoned lock).
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
