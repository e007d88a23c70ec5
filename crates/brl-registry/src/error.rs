use brl_store::StoreError;
use brl_types::TypeError;
use thiserror::Error;

/// Errors produced by registry operations.
///
/// Every variant that involves a key carries it, so that a caller sees which
/// record an operation failed on without consulting logs.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No bond record exists at the given key.
    #[error("bond not found: {key}")]
    NotFound { key: String },

    /// A create collided with an existing record at the same key.
    #[error("bond already exists: {key}")]
    AlreadyExists { key: String },

    /// Stored bytes at the given key failed to decode as a bond.
    #[error("corrupt bond record at {key}: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// The index record failed to decode.
    #[error("corrupt bond index: {reason}")]
    CorruptIndex { reason: String },

    /// The index key has never been written; bootstrap has not run.
    #[error("bond index missing: registry has not been bootstrapped")]
    IndexMissing,

    /// A bond was submitted with an empty `real_estate_id`.
    #[error("real-estate id must be non-empty")]
    EmptyRealEstateId,

    /// No credential is stored under the given name.
    #[error("credential not found for {name}")]
    CredentialNotFound { name: String },

    /// Encoding a record for storage failed.
    #[error(transparent)]
    Codec(#[from] TypeError),

    /// The underlying store failed a get or put.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
