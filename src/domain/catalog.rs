//! Static symptom catalog. Fixed at compile time; the UI and the triage
//! rules both key off the ids defined here.

use crate::domain::entities::{Symptom, SymptomSeverity};

/// Category names in display order.
pub const CATEGORIES: &[&str] = &[
    "Head & Neurological",
    "Respiratory",
    "Digestive",
    "General",
    "Skin",
    "Musculoskeletal",
];

/// The full symptom table. Immutable; ids are unique.
pub const SYMPTOMS: &[Symptom] = &[
    // Head & Neurological
    Symptom {
        id: "headache",
        name: "Headache",
        category: "Head & Neurological",
        severity: SymptomSeverity::Mild,
        icon: "🤕",
    },
    Symptom {
        id: "migraine",
        name: "Migraine",
        category: "Head & Neurological",
        severity: SymptomSeverity::Moderate,
        icon: "😵",
    },
    Symptom {
        id: "dizziness",
        name: "Dizziness",
        category: "Head & Neurological",
        severity: SymptomSeverity::Moderate,
        icon: "💫",
    },
    Symptom {
        id: "confusion",
        name: "Confusion",
        category: "Head & Neurological",
        severity: SymptomSeverity::Severe,
        icon: "😶‍🌫️",
    },
    // Respiratory
    Symptom {
        id: "cough",
        name: "Cough",
        category: "Respiratory",
        severity: SymptomSeverity::Mild,
        icon: "🤧",
    },
    Symptom {
        id: "sore-throat",
        name: "Sore Throat",
        category: "Respiratory",
        severity: SymptomSeverity::Mild,
        icon: "😷",
    },
    Symptom {
        id: "runny-nose",
        name: "Runny Nose",
        category: "Respiratory",
        severity: SymptomSeverity::Mild,
        icon: "🤒",
    },
    Symptom {
        id: "shortness-breath",
        name: "Shortness of Breath",
        category: "Respiratory",
        severity: SymptomSeverity::Severe,
        icon: "😮‍💨",
    },
    Symptom {
        id: "chest-tightness",
        name: "Chest Tightness",
        category: "Respiratory",
        severity: SymptomSeverity::Severe,
        icon: "💔",
    },
    // Digestive
    Symptom {
        id: "nausea",
        name: "Nausea",
        category: "Digestive",
        severity: SymptomSeverity::Mild,
        icon: "🤢",
    },
    Symptom {
        id: "vomiting",
        name: "Vomiting",
        category: "Digestive",
        severity: SymptomSeverity::Moderate,
        icon: "🤮",
    },
    Symptom {
        id: "diarrhea",
        name: "Diarrhea",
        category: "Digestive",
        severity: SymptomSeverity::Moderate,
        icon: "💩",
    },
    Symptom {
        id: "stomach-pain",
        name: "Stomach Pain",
        category: "Digestive",
        severity: SymptomSeverity::Moderate,
        icon: "😣",
    },
    Symptom {
        id: "bloating",
        name: "Bloating",
        category: "Digestive",
        severity: SymptomSeverity::Mild,
        icon: "🫃",
    },
    // General
    Symptom {
        id: "fever",
        name: "Fever",
        category: "General",
        severity: SymptomSeverity::Moderate,
        icon: "🌡️",
    },
    Symptom {
        id: "fatigue",
        name: "Fatigue",
        category: "General",
        severity: SymptomSeverity::Mild,
        icon: "😴",
    },
    Symptom {
        id: "body-aches",
        name: "Body Aches",
        category: "General",
        severity: SymptomSeverity::Mild,
        icon: "🦴",
    },
    Symptom {
        id: "chills",
        name: "Chills",
        category: "General",
        severity: SymptomSeverity::Mild,
        icon: "🥶",
    },
    // Skin
    Symptom {
        id: "rash",
        name: "Skin Rash",
        category: "Skin",
        severity: SymptomSeverity::Mild,
        icon: "🔴",
    },
    Symptom {
        id: "itching",
        name: "Itching",
        category: "Skin",
        severity: SymptomSeverity::Mild,
        icon: "✋",
    },
    Symptom {
        id: "hives",
        name: "Hives",
        category: "Skin",
        severity: SymptomSeverity::Moderate,
        icon: "🟠",
    },
    // Musculoskeletal
    Symptom {
        id: "back-pain",
        name: "Back Pain",
        category: "Musculoskeletal",
        severity: SymptomSeverity::Moderate,
        icon: "🔙",
    },
    Symptom {
        id: "joint-pain",
        name: "Joint Pain",
        category: "Musculoskeletal",
        severity: SymptomSeverity::Moderate,
        icon: "🦵",
    },
    Symptom {
        id: "muscle-cramps",
        name: "Muscle Cramps",
        category: "Musculoskeletal",
        severity: SymptomSeverity::Mild,
        icon: "💪",
    },
];

/// Look up a symptom by id. Returns None for unknown ids.
pub fn find(id: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|s| s.id == id)
}

/// All symptoms in the given category, in catalog order.
pub fn by_category(category: &str) -> Vec<&'static Symptom> {
    SYMPTOMS.iter().filter(|s| s.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SYMPTOMS.len(), 24);
        assert_eq!(CATEGORIES.len(), 6);
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<&str> = SYMPTOMS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SYMPTOMS.len());
    }

    #[test]
    fn test_every_symptom_has_known_category() {
        for s in SYMPTOMS {
            assert!(
                CATEGORIES.contains(&s.category),
                "unknown category for {}",
                s.id
            );
        }
    }

    #[test]
    fn test_every_category_non_empty() {
        for c in CATEGORIES {
            assert!(!by_category(c).is_empty(), "no symptoms in {}", c);
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("fever").map(|s| s.name), Some("Fever"));
        assert!(find("not-a-symptom").is_none());
    }
}
