//! Per-conversation state and session management.
//!
//! Each conversation owns its own history and "last discussed service";
//! state is never shared across conversations. The `SessionManager` hands
//! out per-session `Arc<Mutex<Conversation>>` handles, so updates to one
//! conversation serialize on its mutex while different conversations stay
//! fully independent.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use seva_agent_core::{QueryAnalysis, ServiceRecord, Turn};

/// Dialogue state machine phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialoguePhase {
    /// No service resolved yet
    Idle,
    /// A service was just discussed; follow-ups refer to it
    HasContext,
}

/// One conversation's mutable state.
#[derive(Debug)]
pub struct Conversation {
    session_id: String,
    turns: Vec<Turn>,
    last_service: Option<ServiceRecord>,
    last_activity: Instant,
}

impl Conversation {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            turns: Vec::new(),
            last_service: None,
            last_activity: Instant::now(),
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn phase(&self) -> DialoguePhase {
        if self.last_service.is_some() {
            DialoguePhase::HasContext
        } else {
            DialoguePhase::Idle
        }
    }

    pub fn last_service(&self) -> Option<&ServiceRecord> {
        self.last_service.as_ref()
    }

    /// Store the just-resolved service; a later resolution overwrites it.
    pub fn set_last_service(&mut self, record: ServiceRecord) {
        self.last_service = Some(record);
    }

    /// Append the user/assistant turn pair for one exchange.
    pub fn record_exchange(&mut self, user_text: &str, bot_text: &str, analysis: QueryAnalysis) {
        self.turns.push(Turn::user(user_text).with_analysis(analysis));
        self.turns.push(Turn::assistant(bot_text));
        self.last_activity = Instant::now();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }
}

/// Hands out per-conversation state keyed by session id.
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Mutex<Conversation>>>>,
    max_sessions: usize,
}

impl SessionManager {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
        }
    }

    /// Get the conversation for an id, creating it on first use. At
    /// capacity, the longest-idle conversation is evicted first.
    pub fn get_or_create(&self, id: &str) -> Arc<Mutex<Conversation>> {
        if let Some(existing) = self.sessions.read().get(id) {
            return existing.clone();
        }

        let mut sessions = self.sessions.write();
        if let Some(existing) = sessions.get(id) {
            return existing.clone();
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, conversation)| conversation.lock().last_activity())
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                sessions.remove(&key);
                tracing::debug!(session_id = %key, "Evicted longest-idle conversation");
            }
        }

        let conversation = Arc::new(Mutex::new(Conversation::new(id)));
        sessions.insert(id.to_string(), conversation.clone());
        tracing::debug!(session_id = %id, "Conversation created");
        conversation
    }

    /// Create a conversation with a generated id.
    pub fn create_session(&self) -> (String, Arc<Mutex<Conversation>>) {
        let id = Uuid::new_v4().to_string();
        let conversation = self.get_or_create(&id);
        (id, conversation)
    }

    pub fn remove(&self, id: &str) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
