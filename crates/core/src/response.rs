//! Structured response envelope returned by the pipeline.

use serde::{Deserialize, Serialize};

use crate::Language;

/// Which branch of the response state machine produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Greeting,
    Farewell,
    Clarification,
    FollowUp,
    NoResults,
    ServiceInfo,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Greeting => "greeting",
            ResponseType::Farewell => "farewell",
            ResponseType::Clarification => "clarification",
            ResponseType::FollowUp => "follow_up",
            ResponseType::NoResults => "no_results",
            ResponseType::ServiceInfo => "service_info",
        }
    }
}

impl std::fmt::Display for ResponseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The pipeline's answer to a single user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredResponse {
    /// Rendered reply text
    pub text: String,
    /// Response branch
    #[serde(rename = "type")]
    pub response_type: ResponseType,
    /// Language the reply was rendered in
    pub language: Language,
    /// Resolved service, when the reply refers to one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
}

impl StructuredResponse {
    /// A reply that does not refer to a specific service.
    pub fn plain(text: impl Into<String>, response_type: ResponseType, language: Language) -> Self {
        Self {
            text: text.into(),
            response_type,
            language,
            service_id: None,
            service_name: None,
        }
    }

    /// A reply about a resolved service.
    pub fn for_service(
        text: impl Into<String>,
        response_type: ResponseType,
        language: Language,
        service_id: impl Into<String>,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            response_type,
            language,
            service_id: Some(service_id.into()),
            service_name: Some(service_name.into()),
        }
    }
}
