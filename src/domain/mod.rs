//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod triage;

pub use entities::{
    Assessment, ChatMessage, Medication, MedicationKind, Remedy, Role, Symptom, SymptomSeverity,
    TriageLevel,
};
pub use errors::DomainError;
