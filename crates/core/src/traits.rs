//! Traits at the pipeline's pluggable seams.

use crate::{Language, Result, ServiceRecord};

/// Maps text to a fixed-dimension vector with cosine similarity as the
/// comparison metric.
///
/// The pipeline assumes nothing about the algorithm behind this trait; the
/// default TF-IDF implementation and a dense neural sentence embedder are
/// interchangeable as long as both produce vectors of the same dimension.
pub trait Embedder: Send + Sync {
    /// Embed a single text. Must be total: empty or out-of-vocabulary text
    /// yields the zero vector, never an error.
    fn embed(&self, text: &str) -> Vec<f32>;

    /// Embed a batch of texts.
    fn embed_batch(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Output dimension, identical for every call.
    fn dim(&self) -> usize;
}

/// Read interface to the service record store.
///
/// Population of the store is outside the core; the pipeline only ever
/// fetches by id after retrieval resolves one.
pub trait RecordSource: Send + Sync {
    fn get_record(&self, id: &str) -> Result<Option<ServiceRecord>>;
}

/// Decorates a factual response block with conversational phrasing.
///
/// Implementations must not alter factual content; only the wrapping may
/// vary between calls. Selected by configuration, so a pass-through
/// variant and an enhanced variant can be swapped without touching the
/// pipeline.
pub trait ResponseWrapper: Send + Sync {
    fn wrap(&self, factual: &str, language: Language) -> String;
}
