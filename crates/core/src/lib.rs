//! Core types and traits for the bilingual service assistant
//!
//! This crate provides foundational types used across all other crates:
//! - Language, intent, and topic enums
//! - Query analysis and service record types
//! - Structured response envelope
//! - Conversation turn types
//! - Error types
//! - Traits for pluggable backends (embedder, record source, wrapper)

pub mod conversation;
pub mod error;
pub mod intent;
pub mod language;
pub mod query;
pub mod response;
pub mod service;
pub mod traits;

pub use conversation::{Turn, TurnRole};
pub use error::{Error, Result};
pub use intent::Intent;
pub use language::Language;
pub use query::{QueryAnalysis, Topic};
pub use response::{ResponseType, StructuredResponse};
pub use service::ServiceRecord;
pub use traits::{Embedder, RecordSource, ResponseWrapper};
