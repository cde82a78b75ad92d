use thiserror::Error;

/// Top-level error type for the assistant core.
///
/// "No match" and "ambiguous query" conditions are not errors; they are
/// modeled as regular response types. Only structurally invalid persisted
/// state (corrupt index files, dimension disagreement) is a hard failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("Malformed service record '{id}': {reason}")]
    MalformedRecord { id: String, reason: String },

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for assistant operations.
pub type Result<T> = std::result::Result<T, Error>;
