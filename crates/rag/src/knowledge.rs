//! Knowledge base: fitted embedder + vector index over service records.
//!
//! Built once at startup from the full record corpus; immutable afterwards,
//! so it can be shared read-only across concurrently handled requests. The
//! build completing before the first search is the one-time initialization
//! barrier the pipeline relies on.

use std::path::Path;

use seva_agent_core::{Embedder, ServiceRecord};

use crate::embeddings::{EmbeddingConfig, TfidfEmbedder};
use crate::index::{DocumentMeta, SearchResult, VectorIndex};
use crate::RagError;

pub struct KnowledgeBase {
    embedder: TfidfEmbedder,
    index: VectorIndex,
}

impl KnowledgeBase {
    /// Fit the embedder over the corpus and index every record.
    pub fn build(records: &[ServiceRecord], config: EmbeddingConfig) -> Result<Self, RagError> {
        let texts: Vec<String> = records.iter().map(|r| r.embedding_text()).collect();
        let text_refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();

        let mut embedder = TfidfEmbedder::new(config);
        embedder.fit(&text_refs);

        let mut index = VectorIndex::new(embedder.dim());
        for (record, text) in records.iter().zip(text_refs.iter()) {
            let embedding = embedder.embed(text);
            index.add(
                embedding,
                DocumentMeta {
                    id: record.id.clone(),
                    name_en: record.name_en.clone(),
                    name_ta: record.name_ta.clone(),
                },
            )?;
        }

        tracing::info!(documents = index.document_count(), "Knowledge base built");

        Ok(Self { embedder, index })
    }

    /// Embed the query and rank the corpus by cosine similarity.
    pub fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>, RagError> {
        let embedding = self.embedder.embed(query);
        self.index.search(&embedding, k)
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Persist the index files plus the fitted vocabulary into `dir`.
    pub fn save(&self, dir: &Path) -> Result<(), RagError> {
        self.index.save(dir)?;
        self.embedder.save(&dir.join("vocabulary.json"))
    }

    /// Load a persisted knowledge base. An embedder/index dimension
    /// disagreement is fatal here, not deferred to query time.
    pub fn load(dir: &Path) -> Result<Self, RagError> {
        let index = VectorIndex::load(dir)?;
        let embedder = TfidfEmbedder::load(&dir.join("vocabulary.json"))?;

        if embedder.dim() != index.dimension() {
            return Err(RagError::DimensionMismatch {
                expected: index.dimension(),
                actual: embedder.dim(),
            });
        }

        Ok(Self { embedder, index })
    }
}
