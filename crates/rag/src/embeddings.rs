//! TF-IDF text embeddings.
//!
//! A lightweight, deterministic alternative to neural sentence embeddings:
//! the embedder is fitted once over the document corpus, building a
//! unigram+bigram vocabulary capped at the configured dimension, and then
//! projects arbitrary query text into that fixed space. Out-of-vocabulary
//! terms contribute zero weight. Any embedder producing fixed-dimension
//! vectors comparable by cosine similarity can replace this one behind the
//! `Embedder` trait.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use seva_agent_core::Embedder;
use seva_agent_text_processing::{normalize, tamil};

use crate::RagError;

/// Embedding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Output dimension D. The vocabulary is capped at D features, so
    /// vectors are implicitly zero-padded to exactly D.
    pub dimension: usize,
    /// Largest n-gram length; 2 = unigrams and bigrams
    pub ngram_max: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimension: 768,
            ngram_max: 2,
        }
    }
}

/// One vocabulary term with its feature index and IDF weight
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TermEntry {
    term: String,
    index: usize,
    idf: f32,
}

/// Persisted vocabulary layout
#[derive(Debug, Serialize, Deserialize)]
struct VocabularyFile {
    dimension: usize,
    ngram_max: usize,
    terms: Vec<TermEntry>,
}

/// TF-IDF embedder with a fitted vocabulary.
pub struct TfidfEmbedder {
    config: EmbeddingConfig,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    fitted: bool,
}

impl TfidfEmbedder {
    pub fn new(config: EmbeddingConfig) -> Self {
        let dimension = config.dimension;
        Self {
            config,
            vocabulary: HashMap::new(),
            idf: vec![0.0; dimension],
            fitted: false,
        }
    }

    /// Whether `fit` has been called
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit the vocabulary over the full document corpus.
    ///
    /// Features are ranked by document frequency (ties broken
    /// lexicographically) and capped at the configured dimension, then
    /// assigned indices in lexicographic order so repeated fits over the
    /// same corpus produce identical vectors. IDF uses the smoothed form
    /// ln((1 + n) / (1 + df)) + 1.
    pub fn fit(&mut self, texts: &[&str]) {
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for text in texts {
            let mut seen: Vec<String> = Vec::new();
            for feature in self.features(text) {
                if !seen.contains(&feature) {
                    seen.push(feature);
                }
            }
            for feature in seen {
                *document_frequency.entry(feature).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(String, usize)> = document_frequency.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(self.config.dimension);

        let mut selected: Vec<(String, usize)> = ranked;
        selected.sort_by(|a, b| a.0.cmp(&b.0));

        let n_docs = texts.len();
        self.vocabulary = HashMap::with_capacity(selected.len());
        self.idf = vec![0.0; self.config.dimension];

        for (index, (term, df)) in selected.into_iter().enumerate() {
            self.idf[index] = ((1 + n_docs) as f32 / (1 + df) as f32).ln() + 1.0;
            self.vocabulary.insert(term, index);
        }

        self.fitted = true;

        tracing::info!(
            documents = n_docs,
            vocabulary = self.vocabulary.len(),
            dimension = self.config.dimension,
            "TF-IDF embedder fitted"
        );
    }

    /// Extract unigram and n-gram features from normalized text
    fn features(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        let tokens = tamil::tokenize(&normalized);

        let mut features: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        for n in 2..=self.config.ngram_max {
            if tokens.len() < n {
                break;
            }
            for window in tokens.windows(n) {
                features.push(window.join(" "));
            }
        }
        features
    }

    /// Save the fitted vocabulary to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), RagError> {
        let mut terms: Vec<TermEntry> = self
            .vocabulary
            .iter()
            .map(|(term, &index)| TermEntry {
                term: term.clone(),
                index,
                idf: self.idf[index],
            })
            .collect();
        terms.sort_by_key(|entry| entry.index);

        let file = VocabularyFile {
            dimension: self.config.dimension,
            ngram_max: self.config.ngram_max,
            terms,
        };

        let json = serde_json::to_string(&file)
            .map_err(|e| RagError::Persistence(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| RagError::Persistence(e.to_string()))?;

        Ok(())
    }

    /// Load a fitted vocabulary from a JSON file
    pub fn load(path: &Path) -> Result<Self, RagError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| RagError::Persistence(e.to_string()))?;
        let file: VocabularyFile =
            serde_json::from_str(&content).map_err(|e| RagError::Persistence(e.to_string()))?;

        let mut vocabulary = HashMap::with_capacity(file.terms.len());
        let mut idf = vec![0.0; file.dimension];

        for entry in file.terms {
            if entry.index >= file.dimension {
                return Err(RagError::Persistence(format!(
                    "vocabulary index {} exceeds dimension {}",
                    entry.index, file.dimension
                )));
            }
            idf[entry.index] = entry.idf;
            vocabulary.insert(entry.term, entry.index);
        }

        Ok(Self {
            config: EmbeddingConfig {
                dimension: file.dimension,
                ngram_max: file.ngram_max,
            },
            vocabulary,
            idf,
            fitted: true,
        })
    }
}

impl Embedder for TfidfEmbedder {
    /// Project text into the fitted vocabulary space with L2 normalization.
    /// Empty text, unfitted state, and fully out-of-vocabulary text all
    /// yield the zero vector; this function never fails.
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.config.dimension];

        if !self.fitted {
            tracing::debug!("embed called before fit; returning zero vector");
            return vector;
        }

        for feature in self.features(text) {
            if let Some(&index) = self.vocabulary.get(&feature) {
                vector[index] += self.idf[index];
            }
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        vector
    }

    fn dim(&self) -> usize {
        self.config.dimension
    }
}
