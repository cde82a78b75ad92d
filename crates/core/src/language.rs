//! Language identification result shared across the pipeline.

use serde::{Deserialize, Serialize};

/// Detected query language.
///
/// Only Tamil and English have template renderings; anything else is
/// `Unknown` and is answered with the English templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Tamil,
    English,
    #[default]
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Tamil => "tamil",
            Language::English => "english",
            Language::Unknown => "unknown",
        }
    }

    /// Short code used to select bilingual record fields and templates.
    /// Unknown falls back to English rendering.
    pub fn short_code(&self) -> &'static str {
        match self {
            Language::Tamil => "ta",
            Language::English | Language::Unknown => "en",
        }
    }

    pub fn is_tamil(&self) -> bool {
        matches!(self, Language::Tamil)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
