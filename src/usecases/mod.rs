//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_service;
pub mod triage_service;

pub use chat_service::ChatService;
pub use triage_service::TriageService;
