//! Keyword-driven query classification.
//!
//! Every decision is explainable by which literal phrase matched. The
//! phrase tables come from `LexiconConfig`; this module only walks them.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use seva_agent_core::{Intent, Language, QueryAnalysis, Topic};
use seva_agent_config::{LanguageConfig, LexiconConfig};

use crate::language::LanguageDetector;
use crate::normalize::normalize;
use crate::tamil;

/// Classifier producing the full `QueryAnalysis` for a raw query.
pub struct QueryClassifier {
    lexicon: LexiconConfig,
    detector: LanguageDetector,
    tamil_stopwords: HashSet<String>,
}

impl QueryClassifier {
    pub fn new(lexicon: LexiconConfig, language: &LanguageConfig) -> Self {
        let tamil_stopwords = lexicon.tamil_stopwords.iter().cloned().collect();
        tracing::info!(
            intents = lexicon.intents.len(),
            topics = lexicon.topics.len(),
            "Query classifier initialized"
        );
        Self {
            lexicon,
            detector: LanguageDetector::new(language.tamil_ratio_threshold),
            tamil_stopwords,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(LexiconConfig::default(), &LanguageConfig::default())
    }

    pub fn detect_language(&self, text: &str) -> Language {
        self.detector.detect(text)
    }

    /// First intent whose keyword set has a substring match wins. The
    /// lexicon orders specific action intents before generic ones, which is
    /// the tie-break: "download my certificate and apply" is Download.
    pub fn extract_intent(&self, normalized_text: &str) -> Intent {
        for entry in &self.lexicon.intents {
            for keyword in &entry.keywords {
                if normalized_text.contains(keyword.as_str()) {
                    tracing::debug!(intent = %entry.intent, keyword = %keyword, "Intent matched");
                    return entry.intent;
                }
            }
        }
        Intent::GeneralInquiry
    }

    /// Same first-match mechanism over the topic table.
    pub fn extract_topic(&self, normalized_text: &str) -> Topic {
        for entry in &self.lexicon.topics {
            for keyword in &entry.keywords {
                if normalized_text.contains(keyword.as_str()) {
                    return entry.topic;
                }
            }
        }
        Topic::General
    }

    pub fn is_greeting(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.lexicon
            .greetings
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }

    pub fn is_farewell(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.lexicon
            .farewells
            .iter()
            .any(|phrase| lowered.contains(phrase.as_str()))
    }

    /// Full analysis of a raw query.
    pub fn analyze(&self, text: &str) -> QueryAnalysis {
        let language = self.detector.detect(text);
        let normalized_text = normalize(text);
        let intent = self.extract_intent(&normalized_text);
        let topic = self.extract_topic(&normalized_text);
        let keywords = self.extract_keywords(&normalized_text, language);

        tracing::debug!(
            %language,
            %intent,
            %topic,
            "Query analyzed"
        );

        QueryAnalysis {
            language,
            intent,
            topic,
            keywords,
            normalized_text,
            original_text: text.to_string(),
        }
    }

    /// Keyword extraction: Tamil queries are tokenized and stopword
    /// filtered then ranked by frequency; English queries keep the first
    /// five alphanumeric words longer than three characters.
    fn extract_keywords(&self, normalized_text: &str, language: Language) -> Vec<String> {
        const MAX_KEYWORDS: usize = 5;

        if language.is_tamil() {
            // Count in first-occurrence order so equal frequencies rank
            // deterministically.
            let mut ordered: Vec<(String, usize)> = Vec::new();
            for token in tamil::tokenize(normalized_text) {
                if self.tamil_stopwords.contains(token) {
                    continue;
                }
                match ordered.iter_mut().find(|(t, _)| t == token) {
                    Some((_, count)) => *count += 1,
                    None => ordered.push((token.to_string(), 1)),
                }
            }
            ordered.sort_by(|a, b| b.1.cmp(&a.1));
            ordered
                .into_iter()
                .take(MAX_KEYWORDS)
                .map(|(token, _)| token)
                .collect()
        } else {
            // unicode_words strips punctuation, so "certificate?" still
            // counts as a keyword
            normalized_text
                .unicode_words()
                .filter(|word| word.chars().count() > 3)
                .take(MAX_KEYWORDS)
                .map(|word| word.to_string())
                .collect()
        }
    }
}
