//! Configuration for the bilingual service assistant
//!
//! Three layers:
//! - `Settings`: runtime tunables (dimensions, thresholds, word-count
//!   limits), loaded from file + `SEVA_` environment overlay.
//! - `LexiconConfig`: the keyword vocabulary driving classification
//!   (intent/topic tables, greeting/farewell phrases, follow-up and vague
//!   word lists, stopwords). Data, not code: YAML-overridable with embedded
//!   defaults.
//! - `TemplatesConfig`: bilingual response template table.

pub mod lexicon;
pub mod settings;
pub mod templates;

pub use lexicon::{IntentKeywords, LexiconConfig, TopicKeywords};
pub use settings::{
    DialogueConfig, LanguageConfig, RetrievalConfig, Settings, WrapperMode,
};
pub use templates::{TemplateKind, TemplatesConfig};

use thiserror::Error;

/// Errors when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {path}: {source_message}")]
    FileNotFound {
        path: String,
        source_message: String,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<ConfigError> for seva_agent_core::Error {
    fn from(err: ConfigError) -> Self {
        seva_agent_core::Error::Config(err.to_string())
    }
}
