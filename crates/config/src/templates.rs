//! Bilingual response template table.
//!
//! Static mapping from template kind × language to text, loaded once at
//! startup. Embedded defaults carry the production texts; a YAML file can
//! replace any entry without touching code.

use serde::{Deserialize, Serialize};
use std::path::Path;

use seva_agent_core::Language;

use crate::ConfigError;

/// Template slots the response state machine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Greeting,
    Farewell,
    /// Menu of known services shown for vague queries
    Clarification,
    /// Fallback when retrieval finds nothing confident enough
    NoResults,
    /// Prompt when a follow-up arrives with no service in context
    FollowUpNoContext,
}

/// One template in both renderings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BilingualTemplate {
    pub en: String,
    pub ta: String,
}

impl BilingualTemplate {
    fn new(en: &str, ta: &str) -> Self {
        Self {
            en: en.to_string(),
            ta: ta.to_string(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        if language.is_tamil() {
            &self.ta
        } else {
            &self.en
        }
    }
}

/// The full template table. Struct fields rather than a string-keyed map so
/// a missing template is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default = "default_greeting")]
    pub greeting: BilingualTemplate,
    #[serde(default = "default_farewell")]
    pub farewell: BilingualTemplate,
    #[serde(default = "default_clarification")]
    pub clarification: BilingualTemplate,
    #[serde(default = "default_no_results")]
    pub no_results: BilingualTemplate,
    #[serde(default = "default_follow_up_no_context")]
    pub follow_up_no_context: BilingualTemplate,
}

fn default_greeting() -> BilingualTemplate {
    BilingualTemplate::new(
        "Hello! I'm here to help you with Tamil Nadu government services. How can I assist you today?",
        "வணக்கம்! தமிழ்நாடு அரசு சேவைகள் தொடர்பாக நான் உங்களுக்கு உதவ இங்கே இருக்கிறேன். இன்று நான் உங்களுக்கு எப்படி உதவ முடியும்?",
    )
}

fn default_farewell() -> BilingualTemplate {
    BilingualTemplate::new(
        "Thank you for using our service. Have a great day!",
        "எங்கள் சேவையைப் பயன்படுத்தியதற்கு நன்றி. நல்ல நாள்!",
    )
}

fn default_clarification() -> BilingualTemplate {
    BilingualTemplate::new(
        "I'd love to help you! 😊\n\n\
         Which service would you like to know about?\n\n\
         🔹 Birth Certificate (பிறப்பு சான்றிதழ்)\n\
         🔹 Income Certificate (வருமான சான்றிதழ்)\n\
         🔹 Community Certificate (சமூக சான்றிதழ்)\n\
         🔹 Ration Card (ரேஷன் அட்டை)\n\n\
         You can pick one of these or tell me more about what you need!",
        "நான் உங்களுக்கு உதவ விரும்புகிறேன்! 😊\n\n\
         நீங்கள் எந்த சேவையைப் பற்றி தெரிந்து கொள்ள விரும்புகிறீர்கள்?\n\n\
         🔹 பிறப்பு சான்றிதழ் (Birth Certificate)\n\
         🔹 வருமான சான்றிதழ் (Income Certificate)\n\
         🔹 சமூக சான்றிதழ் (Community Certificate)\n\
         🔹 ரேஷன் அட்டை (Ration Card)\n\n\
         இவற்றில் ஏதேனும் ஒன்றைத் தேர்ந்தெடுக்கவும் அல்லது உங்கள் கேள்வியை விரிவாகக் கூறவும்!",
    )
}

fn default_no_results() -> BilingualTemplate {
    BilingualTemplate::new(
        "I'm sorry, I couldn't find exact information about that. 😔\n\n\
         But I can help you with:\n\n\
         🔹 How to get Birth Certificate?\n\
         🔹 Need Income Certificate?\n\
         🔹 Ration Card application?\n\
         🔹 Community Certificate documents?\n\n\
         Or try asking your question differently! 💚\n\n\
         Helpline: 1800-425-1000",
        "மன்னிக்கவும், எனக்கு துல்லியமான தகவல் கிடைக்கவில்லை. 😔\n\n\
         ஆனால் நான் உங்களுக்கு உதவ முடியும்:\n\n\
         🔹 பிறப்பு சான்றிதழ் எப்படி பெறுவது?\n\
         🔹 வருமான சான்றிதழ் தேவையா?\n\
         🔹 ரேஷன் அட்டை விண்ணப்பம்?\n\
         🔹 சமூக சான்றிதழ் ஆவணங்கள்?\n\n\
         அல்லது எனக்கு உங்கள் கேள்வியை வேறு விதமாக கேளுங்கள்! 💚\n\n\
         தொடர்பு எண்: 1800-425-1000",
    )
}

fn default_follow_up_no_context() -> BilingualTemplate {
    BilingualTemplate::new(
        "Which service are you asking about? Please let me know! 😊",
        "நீங்கள் எந்த சேவையைப் பற்றி கேட்கிறீர்கள்? தயவுசெய்து குறிப்பிடவும்! 😊",
    )
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            farewell: default_farewell(),
            clarification: default_clarification(),
            no_results: default_no_results(),
            follow_up_no_context: default_follow_up_no_context(),
        }
    }
}

impl TemplatesConfig {
    /// Load from a YAML file; entries absent from the file keep defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileNotFound {
                path: path.as_ref().display().to_string(),
                source_message: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve a template for a kind and language. Unknown-language queries
    /// get the English rendering.
    pub fn get(&self, kind: TemplateKind, language: Language) -> &str {
        let template = match kind {
            TemplateKind::Greeting => &self.greeting,
            TemplateKind::Farewell => &self.farewell,
            TemplateKind::Clarification => &self.clarification,
            TemplateKind::NoResults => &self.no_results,
            TemplateKind::FollowUpNoContext => &self.follow_up_no_context,
        };
        template.get(language)
    }
}
