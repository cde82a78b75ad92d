//! Heuristic language detection.

use seva_agent_core::Language;

use crate::tamil;

/// Script-ratio language detector.
///
/// Tamil wins when the Tamil-block character fraction exceeds the
/// configured threshold; otherwise a Latin-alphabetic heuristic decides
/// English. Everything else is `Unknown` and is answered with English
/// templates downstream.
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    tamil_ratio_threshold: f32,
}

impl LanguageDetector {
    pub fn new(tamil_ratio_threshold: f32) -> Self {
        Self {
            tamil_ratio_threshold,
        }
    }

    pub fn detect(&self, text: &str) -> Language {
        let mut latin_chars = 0usize;
        let mut total_chars = 0usize;

        for c in text.chars() {
            if c.is_whitespace() {
                continue;
            }
            total_chars += 1;
            if c.is_ascii_alphabetic() {
                latin_chars += 1;
            }
        }

        if total_chars == 0 {
            return Language::Unknown;
        }

        if tamil::tamil_ratio(text) > self.tamil_ratio_threshold {
            return Language::Tamil;
        }

        let latin_ratio = latin_chars as f32 / total_chars as f32;
        if latin_ratio > 0.5 {
            return Language::English;
        }

        Language::Unknown
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(0.3)
    }
}
