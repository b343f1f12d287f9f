//! Error types.
//!
//! The selector itself only fails at construction (`InvalidCapacity`); the
//! remaining variants come from loading inputs and persisting selectors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid capacity {0}: a selector must retain at least one value")]
    InvalidCapacity(usize),

    #[error("Snapshot holds {len} values but the capacity is {capacity}")]
    Overfull { len: usize, capacity: usize },

    #[error("Invalid value {token:?} on line {line}")]
    Parse { line: usize, token: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error while encoding CBOR: {0}")]
    Encode(#[from] ciborium::ser::Error<std::io::Error>),

    #[error("Error while decoding CBOR: {0}")]
    Decode(#[from] ciborium::de::Error<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, Error>;
