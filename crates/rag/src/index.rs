//! In-memory vector index with brute-force cosine similarity search.
//!
//! Documents are kept in insertion order; ranking sorts by descending
//! similarity with a stable sort, so equal scores resolve to the earlier
//! insertion. Persistence writes three files into a directory (document
//! metadata list, embedding matrix, metadata record) and load validates
//! that they agree.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::RagError;

/// Denominator guard for degenerate (all-zero) vectors
const COSINE_EPSILON: f32 = 1e-10;

/// Metadata stored alongside each embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Service record id
    pub id: String,
    pub name_en: String,
    pub name_ta: String,
}

/// One ranked search hit
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Service record id
    pub id: String,
    /// Cosine similarity to the query
    pub score: f32,
    /// Document metadata
    pub meta: DocumentMeta,
}

/// Index metadata persisted next to the matrix
#[derive(Debug, Serialize, Deserialize)]
struct IndexMetadata {
    dimension: usize,
    document_count: usize,
}

/// Brute-force cosine similarity index.
pub struct VectorIndex {
    dimension: usize,
    documents: Vec<DocumentMeta>,
    embeddings: Vec<Vec<f32>>,
}

impl VectorIndex {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            documents: Vec::new(),
            embeddings: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Append a document. The embedding must already be the index
    /// dimension; the vectorizer is responsible for padding/truncation.
    pub fn add(&mut self, embedding: Vec<f32>, meta: DocumentMeta) -> Result<(), RagError> {
        if embedding.len() != self.dimension {
            return Err(RagError::DimensionMismatch {
                expected: self.dimension,
                actual: embedding.len(),
            });
        }
        self.embeddings.push(embedding);
        self.documents.push(meta);
        Ok(())
    }

    /// Top-k search by cosine similarity.
    ///
    /// An empty index returns an empty result, not an error. Results are
    /// ordered by descending score; ties keep insertion order.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchResult>, RagError> {
        if self.is_empty() {
            return Ok(Vec::new());
        }

        if query.len() != self.dimension {
            return Err(RagError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut results: Vec<SearchResult> = self
            .embeddings
            .iter()
            .zip(self.documents.iter())
            .map(|(embedding, meta)| SearchResult {
                id: meta.id.clone(),
                score: cosine_similarity(query, embedding),
                meta: meta.clone(),
            })
            .collect();

        // Stable sort keeps insertion order for equal scores
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);

        Ok(results)
    }

    /// Persist the index into a directory: `documents.json`,
    /// `embeddings.json` (document_count × dimension), `metadata.json`.
    pub fn save(&self, dir: &Path) -> Result<(), RagError> {
        std::fs::create_dir_all(dir).map_err(|e| RagError::Persistence(e.to_string()))?;

        let metadata = IndexMetadata {
            dimension: self.dimension,
            document_count: self.documents.len(),
        };

        write_json(&dir.join("metadata.json"), &metadata)?;
        write_json(&dir.join("documents.json"), &self.documents)?;
        write_json(&dir.join("embeddings.json"), &self.embeddings)?;

        tracing::info!(
            path = %dir.display(),
            documents = self.documents.len(),
            "Vector index saved"
        );

        Ok(())
    }

    /// Load an index from a directory, validating that the metadata,
    /// document list, and embedding matrix agree. Disagreement is a fatal
    /// load error, never silently truncated.
    pub fn load(dir: &Path) -> Result<Self, RagError> {
        let metadata: IndexMetadata = read_json(&dir.join("metadata.json"))?;
        let documents: Vec<DocumentMeta> = read_json(&dir.join("documents.json"))?;
        let embeddings: Vec<Vec<f32>> = read_json(&dir.join("embeddings.json"))?;

        if documents.len() != metadata.document_count {
            return Err(RagError::Index(format!(
                "document count mismatch: metadata declares {}, found {}",
                metadata.document_count,
                documents.len()
            )));
        }

        if embeddings.len() != documents.len() {
            return Err(RagError::Index(format!(
                "embedding matrix has {} rows for {} documents",
                embeddings.len(),
                documents.len()
            )));
        }

        for row in &embeddings {
            if row.len() != metadata.dimension {
                return Err(RagError::DimensionMismatch {
                    expected: metadata.dimension,
                    actual: row.len(),
                });
            }
        }

        tracing::info!(
            path = %dir.display(),
            documents = documents.len(),
            dimension = metadata.dimension,
            "Vector index loaded"
        );

        Ok(Self {
            dimension: metadata.dimension,
            documents,
            embeddings,
        })
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), RagError> {
    let json = serde_json::to_string(value).map_err(|e| RagError::Persistence(e.to_string()))?;
    std::fs::write(path, json).map_err(|e| RagError::Persistence(e.to_string()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, RagError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        RagError::Persistence(format!("failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        RagError::Persistence(format!("failed to parse {}: {}", path.display(), e))
    })
}

/// Cosine similarity with an epsilon-guarded denominator, so degenerate
/// all-zero vectors score 0.0 instead of dividing by zero.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    dot / (norm_a * norm_b + COSINE_EPSILON)
}
