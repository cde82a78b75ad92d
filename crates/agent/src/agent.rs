//! The answer pipeline.
//!
//! One synchronous pass per query: classify, short-circuit the
//! conversational branches (greeting, farewell, follow-up, vague), then
//! retrieve, threshold-check, synthesize, and update the conversation
//! state. The classifier, knowledge base, and record source are read-only
//! after construction and shared across requests; only the per-session
//! `Conversation` mutates, behind its own mutex.

use std::sync::Arc;

use seva_agent_core::{
    Language, QueryAnalysis, RecordSource, ResponseType, ResponseWrapper, ServiceRecord,
    StructuredResponse,
};
use seva_agent_config::{LexiconConfig, Settings, TemplateKind, TemplatesConfig};
use seva_agent_rag::KnowledgeBase;
use seva_agent_text_processing::QueryClassifier;

use crate::conversation::{Conversation, SessionManager};
use crate::dialogue::DialogueClassifier;
use crate::response::ResponseSynthesizer;
use crate::wrapper::wrapper_for;
use crate::AgentError;

const MAX_SESSIONS: usize = 100;

pub struct SevaAgent {
    classifier: QueryClassifier,
    dialogue: DialogueClassifier,
    knowledge: KnowledgeBase,
    records: Arc<dyn RecordSource>,
    synthesizer: ResponseSynthesizer,
    wrapper: Box<dyn ResponseWrapper>,
    sessions: SessionManager,
    settings: Settings,
}

impl SevaAgent {
    pub fn new(
        settings: Settings,
        lexicon: LexiconConfig,
        templates: TemplatesConfig,
        knowledge: KnowledgeBase,
        records: Arc<dyn RecordSource>,
    ) -> Self {
        let dialogue = DialogueClassifier::new(&lexicon, &settings.dialogue);
        let classifier = QueryClassifier::new(lexicon, &settings.language);
        let wrapper = wrapper_for(settings.wrapper);

        tracing::info!(
            documents = knowledge.document_count(),
            "Agent initialized"
        );

        Self {
            classifier,
            dialogue,
            knowledge,
            records,
            synthesizer: ResponseSynthesizer::new(templates),
            wrapper,
            sessions: SessionManager::new(MAX_SESSIONS),
            settings,
        }
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Answer one user turn within a conversation.
    pub fn answer(
        &self,
        conversation_id: &str,
        user_text: &str,
    ) -> Result<StructuredResponse, AgentError> {
        let analysis = self.classifier.analyze(user_text);
        tracing::debug!(
            conversation_id,
            language = %analysis.language,
            intent = %analysis.intent,
            topic = %analysis.topic,
            "Handling query"
        );

        let session = self.sessions.get_or_create(conversation_id);
        let mut conversation = session.lock();

        let response = self.respond(&mut conversation, &analysis, user_text)?;
        conversation.record_exchange(user_text, &response.text, analysis);

        tracing::debug!(conversation_id, response_type = %response.response_type, "Replied");

        Ok(response)
    }

    /// The response state machine. Branch order matches the dialogue
    /// priority: greeting, farewell, follow-up, vague, then retrieval.
    fn respond(
        &self,
        conversation: &mut Conversation,
        analysis: &QueryAnalysis,
        user_text: &str,
    ) -> Result<StructuredResponse, AgentError> {
        let language = analysis.language;

        if self.classifier.is_greeting(user_text) {
            return Ok(StructuredResponse::plain(
                self.template(TemplateKind::Greeting, language),
                ResponseType::Greeting,
                language,
            ));
        }

        if self.classifier.is_farewell(user_text) {
            return Ok(StructuredResponse::plain(
                self.template(TemplateKind::Farewell, language),
                ResponseType::Farewell,
                language,
            ));
        }

        if self.dialogue.is_follow_up(&analysis.normalized_text) {
            return Ok(self.handle_follow_up(conversation, analysis));
        }

        if self.dialogue.is_vague(&analysis.normalized_text) {
            return Ok(StructuredResponse::plain(
                self.template(TemplateKind::Clarification, language),
                ResponseType::Clarification,
                language,
            ));
        }

        let results = self
            .knowledge
            .search(user_text, self.settings.retrieval.top_k)?;

        let top = match results.first() {
            Some(top) if Self::passes_threshold(top.score, self.settings.retrieval.score_threshold) => {
                top
            },
            Some(top) => {
                tracing::debug!(
                    top_id = %top.id,
                    score = top.score,
                    threshold = self.settings.retrieval.score_threshold,
                    "Best match below threshold"
                );
                return Ok(self.no_results(language));
            },
            None => return Ok(self.no_results(language)),
        };

        let record = match self.records.get_record(&top.id) {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::warn!(record_id = %top.id, "Indexed record missing from store");
                return Ok(self.no_results(language));
            },
            Err(err @ seva_agent_core::Error::MalformedRecord { .. }) => {
                tracing::warn!(record_id = %top.id, error = %err, "Refusing to render malformed record");
                return Ok(self.no_results(language));
            },
            Err(err) => return Err(err.into()),
        };

        let response = self.service_info(&record, analysis);
        conversation.set_last_service(record);
        Ok(response)
    }

    fn service_info(&self, record: &ServiceRecord, analysis: &QueryAnalysis) -> StructuredResponse {
        let language = analysis.language;
        let factual = self
            .synthesizer
            .format_service(record, analysis.intent, language);
        let text = self.wrapper.wrap(&factual, language);

        StructuredResponse::for_service(
            text,
            ResponseType::ServiceInfo,
            language,
            record.id.clone(),
            record.name(language),
        )
    }

    /// Re-emit information about the stored service. With no stored
    /// service the reply is a clarification prompt and the state stays
    /// idle.
    fn handle_follow_up(
        &self,
        conversation: &Conversation,
        analysis: &QueryAnalysis,
    ) -> StructuredResponse {
        let language = analysis.language;

        match conversation.last_service() {
            Some(record) => {
                let text = self
                    .synthesizer
                    .follow_up_detail(record, analysis.intent, language);
                StructuredResponse::for_service(
                    text,
                    ResponseType::FollowUp,
                    language,
                    record.id.clone(),
                    record.name(language),
                )
            },
            None => StructuredResponse::plain(
                self.template(TemplateKind::FollowUpNoContext, language),
                ResponseType::Clarification,
                language,
            ),
        }
    }

    fn no_results(&self, language: Language) -> StructuredResponse {
        StructuredResponse::plain(
            self.synthesizer.no_results(language),
            ResponseType::NoResults,
            language,
        )
    }

    fn template(&self, kind: TemplateKind, language: Language) -> String {
        self.synthesizer.templates().get(kind, language).to_string()
    }

    /// Acceptance test for the top similarity score. The boundary is
    /// inclusive on the accept side: exactly the threshold is answered.
    fn passes_threshold(score: f32, threshold: f32) -> bool {
        score >= threshold
    }
}
