//! Retrieval for the service assistant
//!
//! Features:
//! - TF-IDF embeddings over a fitted bilingual vocabulary (unigrams +
//!   bigrams, fixed output dimension)
//! - In-memory vector index with brute-force cosine similarity and stable
//!   insertion-order tie-break
//! - Directory persistence for the index and vocabulary with load-time
//!   validation
//! - `KnowledgeBase` facade tying embedder and index together
//!
//! The corpus is small (tens to low hundreds of documents), so a linear
//! scan per query is the right trade-off; the index interface does not
//! preclude swapping in an ANN structure later.

pub mod embeddings;
pub mod index;
pub mod knowledge;

pub use embeddings::{EmbeddingConfig, TfidfEmbedder};
pub use index::{DocumentMeta, SearchResult, VectorIndex};
pub use knowledge::KnowledgeBase;

use thiserror::Error;

/// Retrieval errors
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Index error: {0}")]
    Index(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl From<RagError> for seva_agent_core::Error {
    fn from(err: RagError) -> Self {
        match err {
            RagError::DimensionMismatch { expected, actual } => {
                seva_agent_core::Error::DimensionMismatch { expected, actual }
            },
            other => seva_agent_core::Error::Index(other.to_string()),
        }
    }
}
