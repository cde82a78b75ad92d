//! Runtime settings.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Retrieval configuration
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    /// Dialogue heuristics
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Language detection
    #[serde(default)]
    pub language: LanguageConfig,

    /// Conversational wrapper selection
    #[serde(default)]
    pub wrapper: WrapperMode,
}

/// Retrieval and ranking configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Embedding dimension D; document and query vectors are padded or
    /// truncated to exactly this width
    #[serde(default = "default_embedding_dim")]
    pub embedding_dim: usize,

    /// Number of results returned per search
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Minimum top-result similarity to answer with a service; below this
    /// the pipeline falls back to the no-results response. Heuristic,
    /// boundary inclusive on the accept side.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f32,
}

fn default_embedding_dim() -> usize {
    768
}

fn default_top_k() -> usize {
    3
}

fn default_score_threshold() -> f32 {
    0.5
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            embedding_dim: default_embedding_dim(),
            top_k: default_top_k(),
            score_threshold: default_score_threshold(),
        }
    }
}

/// Follow-up and vague-query heuristics.
///
/// The word-count limits come from the source heuristics and carry no
/// deeper rationale; they are exposed as configuration rather than
/// hardcoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueConfig {
    /// An utterance with a continuation keyword counts as a follow-up only
    /// below this many words
    #[serde(default = "default_follow_up_max_words")]
    pub follow_up_max_words: usize,

    /// An utterance with a help-seeking keyword counts as vague only below
    /// this many words
    #[serde(default = "default_vague_max_words")]
    pub vague_max_words: usize,
}

fn default_follow_up_max_words() -> usize {
    5
}

fn default_vague_max_words() -> usize {
    4
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            follow_up_max_words: default_follow_up_max_words(),
            vague_max_words: default_vague_max_words(),
        }
    }
}

/// Language detection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Fraction of Tamil-block characters (over non-whitespace characters)
    /// above which a query is Tamil
    #[serde(default = "default_tamil_ratio_threshold")]
    pub tamil_ratio_threshold: f32,
}

fn default_tamil_ratio_threshold() -> f32 {
    0.3
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            tamil_ratio_threshold: default_tamil_ratio_threshold(),
        }
    }
}

/// Which conversational wrapper decorates factual responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WrapperMode {
    /// Random bilingual opening/closing phrases around the factual block
    #[default]
    Conversational,
    /// Factual block only
    Passthrough,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from an optional file with a `SEVA_` environment
    /// overlay (e.g. `SEVA_RETRIEVAL__TOP_K=5`).
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("SEVA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        settings.validate()?;

        tracing::info!(
            embedding_dim = settings.retrieval.embedding_dim,
            top_k = settings.retrieval.top_k,
            score_threshold = settings.retrieval.score_threshold,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Validate settings ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retrieval.embedding_dim == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.embedding_dim".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if self.retrieval.top_k == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.top_k".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.retrieval.score_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "retrieval.score_threshold".to_string(),
                message: format!(
                    "must be between 0.0 and 1.0, got {}",
                    self.retrieval.score_threshold
                ),
            });
        }

        if !(0.0..=1.0).contains(&self.language.tamil_ratio_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "language.tamil_ratio_threshold".to_string(),
                message: format!(
                    "must be between 0.0 and 1.0, got {}",
                    self.language.tamil_ratio_threshold
                ),
            });
        }

        if self.dialogue.follow_up_max_words == 0 || self.dialogue.vague_max_words == 0 {
            return Err(ConfigError::InvalidValue {
                field: "dialogue".to_string(),
                message: "word-count thresholds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
