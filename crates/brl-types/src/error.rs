use thiserror::Error;

/// Errors produced by the record codec.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A record could not be serialized to bytes.
    #[error("encode error: {0}")]
    Encode(String),

    /// Stored bytes could not be decoded into a record (corrupt record).
    #[error("decode error: {0}")]
    Decode(String),
}
