//! Conversational wrapping of factual responses.
//!
//! The wrapper decorates the deterministic factual block with an opening
//! and closing phrase drawn from small bilingual pools. Variation is
//! cosmetic only; the factual content in between is untouched.

use rand::seq::SliceRandom;

use seva_agent_core::{Language, ResponseWrapper};
use seva_agent_config::WrapperMode;

const TAMIL_OPENINGS: &[&str] = &["நிச்சயமாக! ", "சரி! ", "நல்ல கேள்வி! "];

const TAMIL_CLOSINGS: &[&str] = &[
    "\n\nவேறு ஏதாவது தெரிந்து கொள்ள வேண்டுமா? 😊",
    "\n\nமேலும் விவரங்கள் தேவையா?",
];

const ENGLISH_OPENINGS: &[&str] = &[
    "Sure! ",
    "I'd be happy to help! ",
    "Here's what you need to know: ",
];

const ENGLISH_CLOSINGS: &[&str] = &[
    "\n\nIs there anything else you'd like to know? 😊",
    "\n\nFeel free to ask if you need more details!",
];

/// Randomized opening/closing phrases around the factual block.
pub struct TemplateWrapper;

impl ResponseWrapper for TemplateWrapper {
    fn wrap(&self, factual: &str, language: Language) -> String {
        let mut rng = rand::thread_rng();

        let (openings, closings) = if language.is_tamil() {
            (TAMIL_OPENINGS, TAMIL_CLOSINGS)
        } else {
            (ENGLISH_OPENINGS, ENGLISH_CLOSINGS)
        };

        let opening = openings.choose(&mut rng).copied().unwrap_or("");
        let closing = closings.choose(&mut rng).copied().unwrap_or("");

        format!("{opening}{factual}{closing}")
    }
}

/// No decoration; the factual block is the reply.
pub struct PassthroughWrapper;

impl ResponseWrapper for PassthroughWrapper {
    fn wrap(&self, factual: &str, _language: Language) -> String {
        factual.to_string()
    }
}

/// Select the wrapper implementation from configuration.
pub fn wrapper_for(mode: WrapperMode) -> Box<dyn ResponseWrapper> {
    match mode {
        WrapperMode::Conversational => Box::new(TemplateWrapper),
        WrapperMode::Passthrough => Box::new(PassthroughWrapper),
    }
}
