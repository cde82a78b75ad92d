//! Dialogue management and the answer pipeline
//!
//! Composes the classifier, knowledge base, record store, and response
//! synthesizer into a single `SevaAgent::answer()` call, with
//! per-conversation state held by a `SessionManager`.

pub mod agent;
pub mod conversation;
pub mod dialogue;
pub mod response;
pub mod wrapper;

pub use agent::SevaAgent;
pub use conversation::{Conversation, DialoguePhase, SessionManager};
pub use dialogue::DialogueClassifier;
pub use response::ResponseSynthesizer;
pub use wrapper::{wrapper_for, PassthroughWrapper, TemplateWrapper};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Retrieval error: {0}")]
    Rag(#[from] seva_agent_rag::RagError),

    #[error(transparent)]
    Core(#[from] seva_agent_core::Error),
}
