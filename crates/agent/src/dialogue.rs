//! Follow-up and vague-query heuristics.
//!
//! Both checks combine a keyword hit with a word-count bound so longer
//! on-topic questions that happen to contain "yes" or "need" are not
//! misclassified. They run before topic retrieval, in that priority order,
//! to pre-empt low-confidence matches.

use seva_agent_config::{DialogueConfig, LexiconConfig};

pub struct DialogueClassifier {
    follow_up_words: Vec<String>,
    vague_words: Vec<String>,
    service_name_words: Vec<String>,
    follow_up_max_words: usize,
    vague_max_words: usize,
}

impl DialogueClassifier {
    pub fn new(lexicon: &LexiconConfig, dialogue: &DialogueConfig) -> Self {
        Self {
            follow_up_words: lexicon.follow_up_words.clone(),
            vague_words: lexicon.vague_words.clone(),
            service_name_words: lexicon.service_name_words.clone(),
            follow_up_max_words: dialogue.follow_up_max_words,
            vague_max_words: dialogue.vague_max_words,
        }
    }

    /// Short utterance containing an affirmation/continuation keyword.
    /// Both conditions are required.
    pub fn is_follow_up(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        let word_count = lowered.split_whitespace().count();

        word_count < self.follow_up_max_words
            && self
                .follow_up_words
                .iter()
                .any(|word| lowered.contains(word.as_str()))
    }

    /// Short utterance with a generic help-seeking keyword and no
    /// recognizable service name.
    pub fn is_vague(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        let word_count = lowered.split_whitespace().count();

        word_count < self.vague_max_words
            && self
                .vague_words
                .iter()
                .any(|word| lowered.contains(word.as_str()))
            && !self
                .service_name_words
                .iter()
                .any(|word| lowered.contains(word.as_str()))
    }
}
