//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/terminal types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};

/// A selectable symptom from the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub severity: SymptomSeverity,
    pub icon: &'static str,
}

/// Intrinsic severity of a single symptom (catalog attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymptomSeverity {
    Mild,
    Moderate,
    Severe,
}

/// A suggested medication with dosage guidance and warnings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub kind: MedicationKind,
    pub dosage: String,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MedicationKind {
    Otc,
    Prescription,
}

impl MedicationKind {
    /// Display label matching common packaging terminology.
    pub fn label(self) -> &'static str {
        match self {
            MedicationKind::Otc => "OTC",
            MedicationKind::Prescription => "Prescription",
        }
    }
}

/// A home remedy suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remedy {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// Overall urgency of an assessment. Drives the emergency banner and badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriageLevel {
    Low,
    Moderate,
    High,
    Emergency,
}

impl TriageLevel {
    pub fn label(self) -> &'static str {
        match self {
            TriageLevel::Low => "Low Severity",
            TriageLevel::Moderate => "Moderate Severity",
            TriageLevel::High => "High Severity",
            TriageLevel::Emergency => "Emergency",
        }
    }
}

/// Result of one triage run. Produced fresh per analysis; no identity or lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub condition: String,
    pub description: String,
    pub severity: TriageLevel,
    pub medications: Vec<Medication>,
    pub remedies: Vec<Remedy>,
    pub when_to_seek_help: Vec<String>,
}

/// One turn of the chat transcript. Lives only in memory for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Wire name used by chat-completions APIs.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
