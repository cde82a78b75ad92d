//! Query analysis: the deterministic output of the classifier stage.

use serde::{Deserialize, Serialize};

use crate::{Intent, Language};

/// Coarse service category inferred from keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Birth,
    Income,
    Community,
    Ration,
    License,
    Passport,
    Pension,
    Scholarship,
    #[default]
    General,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Birth => "birth",
            Topic::Income => "income",
            Topic::Community => "community",
            Topic::Ration => "ration",
            Topic::License => "license",
            Topic::Passport => "passport",
            Topic::Pension => "pension",
            Topic::Scholarship => "scholarship",
            Topic::General => "general",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the classifier derives from a raw query.
///
/// Immutable once produced; one instance per user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Detected language
    pub language: Language,
    /// Detected intent
    pub intent: Intent,
    /// Detected service topic
    pub topic: Topic,
    /// Extracted keywords (stopword-filtered, frequency ranked)
    pub keywords: Vec<String>,
    /// Normalized form of the query
    pub normalized_text: String,
    /// The query as typed
    pub original_text: String,
}
