//! medihelp: Interactive symptom checker with rule-based triage and a streaming AI chat assistant, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
