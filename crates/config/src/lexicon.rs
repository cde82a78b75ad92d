//! Keyword lexicon driving classification.
//!
//! Every classification decision in the pipeline is explainable by which
//! literal phrase matched. The phrases live here as data (YAML-overridable
//! with embedded defaults) while the matching logic stays static in the
//! text-processing crate.
//!
//! Intent entries are ORDERED: specific action intents (download, reissue,
//! correction, renewal, status) come before the generic ones so the first
//! match wins deterministically.

use serde::{Deserialize, Serialize};
use std::path::Path;

use seva_agent_core::{Intent, Topic};

use crate::ConfigError;

/// One intent with its trigger keywords (both scripts mixed freely).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentKeywords {
    pub intent: Intent,
    pub keywords: Vec<String>,
}

/// One topic with its trigger keywords.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicKeywords {
    pub topic: Topic,
    pub keywords: Vec<String>,
}

/// The complete keyword vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Ordered intent keyword table; first substring match wins
    #[serde(default)]
    pub intents: Vec<IntentKeywords>,
    /// Ordered topic keyword table
    #[serde(default)]
    pub topics: Vec<TopicKeywords>,
    /// Bilingual greeting phrases
    #[serde(default)]
    pub greetings: Vec<String>,
    /// Bilingual farewell phrases
    #[serde(default)]
    pub farewells: Vec<String>,
    /// Affirmation/continuation words marking a follow-up utterance
    #[serde(default)]
    pub follow_up_words: Vec<String>,
    /// Generic help-seeking words marking a vague utterance
    #[serde(default)]
    pub vague_words: Vec<String>,
    /// Service-name words whose presence disqualifies the vague check
    #[serde(default)]
    pub service_name_words: Vec<String>,
    /// Tamil stopwords removed before keyword extraction
    #[serde(default)]
    pub tamil_stopwords: Vec<String>,
}

impl LexiconConfig {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source_message: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Keywords for a given intent, if present
    pub fn intent_keywords(&self, intent: Intent) -> Option<&[String]> {
        self.intents
            .iter()
            .find(|entry| entry.intent == intent)
            .map(|entry| entry.keywords.as_slice())
    }
}

impl Default for LexiconConfig {
    fn default() -> Self {
        let word_list = |words: &[&str]| words.iter().map(|w| w.to_string()).collect::<Vec<_>>();

        Self {
            intents: vec![
                IntentKeywords {
                    intent: Intent::Download,
                    keywords: word_list(&[
                        "download",
                        "get online",
                        "print",
                        "டவுன்லோட்",
                        "பதிவிறக்க",
                        "பிரிண்ட்",
                        "அச்சிட",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Reissue,
                    keywords: word_list(&[
                        "reissue",
                        "duplicate",
                        "lost",
                        "மீண்டும்",
                        "நகல்",
                        "தொலைந்த",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Correction,
                    keywords: word_list(&[
                        "correct",
                        "change",
                        "modify",
                        "update",
                        "edit",
                        "திருத்த",
                        "மாற்ற",
                        "திருத்தம்",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Renewal,
                    keywords: word_list(&[
                        "renew",
                        "renewal",
                        "extend",
                        "புதுப்பிக்க",
                        "நீட்டிக்க",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Status,
                    keywords: word_list(&[
                        "status",
                        "track",
                        "check status",
                        "progress",
                        "நிலை",
                        "கண்காணிக்க",
                        "எங்கே",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Apply,
                    keywords: word_list(&[
                        "apply",
                        "application",
                        "new",
                        "first time",
                        "விண்ணப்பிக்க",
                        "விண்ணப்பம்",
                        "புதிய",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Documents,
                    keywords: word_list(&[
                        "document",
                        "required",
                        "need what",
                        "ஆவணம்",
                        "தேவை",
                        "என்ன வேண்டும்",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Procedure,
                    keywords: word_list(&[
                        "how to",
                        "process",
                        "procedure",
                        "steps",
                        "எப்படி",
                        "செயல்முறை",
                        "படிகள்",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Contact,
                    keywords: word_list(&[
                        "contact",
                        "phone",
                        "email",
                        "helpline",
                        "தொடர்பு",
                        "எண்",
                        "உதவி",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Fees,
                    keywords: word_list(&[
                        "fee",
                        "cost",
                        "charge",
                        "price",
                        "கட்டணம்",
                        "விலை",
                        "எவ்வளவு",
                    ]),
                },
                IntentKeywords {
                    intent: Intent::Eligibility,
                    keywords: word_list(&[
                        "eligible",
                        "eligibility",
                        "qualify",
                        "தகுதி",
                        "யோக்கியதை",
                    ]),
                },
            ],
            topics: vec![
                TopicKeywords {
                    topic: Topic::Birth,
                    keywords: word_list(&["birth", "certificate", "பிறப்பு", "சான்றிதழ்"]),
                },
                TopicKeywords {
                    topic: Topic::Income,
                    keywords: word_list(&["income", "certificate", "வருமான", "சான்றிதழ்"]),
                },
                TopicKeywords {
                    topic: Topic::Community,
                    keywords: word_list(&["community", "caste", "சமூக", "ஜாதி"]),
                },
                TopicKeywords {
                    topic: Topic::Ration,
                    keywords: word_list(&["ration", "card", "ரேஷன்", "அட்டை"]),
                },
                TopicKeywords {
                    topic: Topic::License,
                    keywords: word_list(&["driving", "license", "ஓட்டுநர்", "உரிமம்"]),
                },
                TopicKeywords {
                    topic: Topic::Passport,
                    keywords: word_list(&["passport", "பாஸ்போர்ட்"]),
                },
                TopicKeywords {
                    topic: Topic::Pension,
                    keywords: word_list(&["pension", "ஓய்வூதியம்"]),
                },
                TopicKeywords {
                    topic: Topic::Scholarship,
                    keywords: word_list(&["scholarship", "உதவித்தொகை"]),
                },
            ],
            greetings: word_list(&[
                "வணக்கம்",
                "hello",
                "hi",
                "hey",
                "good morning",
                "good afternoon",
                "good evening",
                "வாழ்த்துக்கள்",
                "நல்ல காலை",
                "நல்ல பிற்பகல்",
            ]),
            farewells: word_list(&[
                "bye",
                "goodbye",
                "see you",
                "thanks",
                "thank you",
                "நன்றி",
                "போய்வருகிறேன்",
                "பிறகு பார்ப்போம்",
            ]),
            follow_up_words: word_list(&[
                "yes",
                "yeah",
                "ok",
                "okay",
                "sure",
                "more",
                "tell me more",
                "what else",
                "ஆம்",
                "சரி",
                "சொல்லுங்கள்",
                "மேலும்",
                "வேறு",
                "அப்புறம்",
                "and then",
                "next",
                "after that",
                "பிறகு",
                "அடுத்து",
            ]),
            vague_words: word_list(&[
                "help",
                "info",
                "tell me",
                "want to know",
                "need",
                "உதவி",
                "தகவல்",
                "தெரிந்து",
                "தேவை",
            ]),
            service_name_words: word_list(&[
                "birth",
                "income",
                "community",
                "ration",
                "certificate",
                "பிறப்பு",
                "வருமான",
                "சமூக",
                "ரேஷன்",
                "சான்றிதழ்",
            ]),
            tamil_stopwords: word_list(&[
                "அது",
                "இது",
                "அந்த",
                "இந்த",
                "அவர்",
                "இவர்",
                "என்ன",
                "எங்கு",
                "எப்படி",
                "எப்போது",
                "எதற்கு",
                "யார்",
                "எது",
                "எவ்வாறு",
                "ஒரு",
                "மற்றும்",
                "அல்லது",
                "ஆனால்",
                "உடன்",
                "பின்",
                "முன்",
                "மேல்",
                "கீழ்",
                "உள்ளே",
                "வெளியே",
            ]),
        }
    }
}
