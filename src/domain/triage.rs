//! Triage rules. A side-effect-free, priority-ordered match from a
//! selected-symptom set to a canned assessment.
//!
//! Rule order: emergency -> cold/flu -> digestive -> pain -> skin -> default.
//! Unknown ids are dropped before evaluation.

use crate::domain::catalog;
use crate::domain::entities::{Assessment, Medication, MedicationKind, Remedy, TriageLevel};
use std::collections::HashSet;

/// Symptom groups referenced by the rules.
const COLD_FLU: &[&str] = &[
    "cough",
    "sore-throat",
    "runny-nose",
    "fever",
    "body-aches",
    "fatigue",
    "chills",
];
const DIGESTIVE: &[&str] = &["nausea", "vomiting", "diarrhea", "stomach-pain", "bloating"];
const PAIN: &[&str] = &[
    "headache",
    "migraine",
    "back-pain",
    "joint-pain",
    "muscle-cramps",
    "body-aches",
];
const SKIN: &[&str] = &["rash", "itching", "hives"];

/// Map a selection to an assessment. Ids not present in the catalog are
/// silently ignored; an empty (or entirely unknown) selection falls through
/// to the general template.
pub fn assess(selected_ids: &[&str]) -> Assessment {
    let selected: HashSet<&str> = selected_ids
        .iter()
        .copied()
        .filter(|id| catalog::find(id).is_some())
        .collect();

    if selected.contains("chest-tightness")
        || selected.contains("shortness-breath")
        || selected.contains("confusion")
    {
        return emergency();
    }

    if count_in(&selected, COLD_FLU) >= 3 {
        return cold_flu(selected.contains("fever"));
    }

    if count_in(&selected, DIGESTIVE) >= 2 {
        return digestive(selected.contains("vomiting") && selected.contains("diarrhea"));
    }

    if count_in(&selected, PAIN) >= 1 {
        return pain(selected.contains("migraine"));
    }

    if count_in(&selected, SKIN) >= 1 {
        return skin(selected.contains("hives"));
    }

    general()
}

fn count_in(selected: &HashSet<&str>, group: &[&str]) -> usize {
    group.iter().filter(|id| selected.contains(*id)).count()
}

fn med(name: &str, kind: MedicationKind, dosage: &str, warnings: &[&str]) -> Medication {
    Medication {
        name: name.to_string(),
        kind,
        dosage: dosage.to_string(),
        warnings: strings(warnings),
    }
}

fn remedy(title: &str, description: &str, icon: &str) -> Remedy {
    Remedy {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn emergency() -> Assessment {
    Assessment {
        condition: "Potential Emergency Condition".to_string(),
        description: "Your symptoms may indicate a serious condition requiring immediate \
                      medical attention."
            .to_string(),
        severity: TriageLevel::Emergency,
        medications: Vec::new(),
        remedies: vec![
            remedy(
                "Call Emergency Services",
                "Dial your local emergency number (911) immediately",
                "🚨",
            ),
            remedy(
                "Stay Calm",
                "Try to remain calm and still while waiting for help",
                "🧘",
            ),
            remedy(
                "Don't Drive Yourself",
                "Wait for emergency services or have someone drive you",
                "🚗",
            ),
        ],
        when_to_seek_help: strings(&[
            "Call 911 immediately",
            "Do not wait to see if symptoms improve",
            "If possible, have someone stay with you",
        ]),
    }
}

fn cold_flu(has_fever: bool) -> Assessment {
    Assessment {
        condition: "Common Cold or Flu".to_string(),
        description: "Your symptoms suggest a viral upper respiratory infection such as the \
                      common cold or influenza."
            .to_string(),
        severity: if has_fever {
            TriageLevel::Moderate
        } else {
            TriageLevel::Low
        },
        medications: vec![
            med(
                "Acetaminophen (Tylenol)",
                MedicationKind::Otc,
                "500-1000mg every 4-6 hours as needed",
                &["Do not exceed 4000mg in 24 hours", "Avoid alcohol"],
            ),
            med(
                "Ibuprofen (Advil)",
                MedicationKind::Otc,
                "200-400mg every 4-6 hours with food",
                &["Take with food", "Not for those with stomach ulcers"],
            ),
            med(
                "Dextromethorphan (Cough Suppressant)",
                MedicationKind::Otc,
                "10-20mg every 4 hours",
                &[
                    "May cause drowsiness",
                    "Don't combine with other cough medicines",
                ],
            ),
            med(
                "Pseudoephedrine (Sudafed)",
                MedicationKind::Otc,
                "60mg every 4-6 hours",
                &["May increase blood pressure", "Avoid before bedtime"],
            ),
        ],
        remedies: vec![
            remedy("Rest Well", "Get plenty of sleep to help your body recover", "😴"),
            remedy("Stay Hydrated", "Drink water, herbal tea, and clear broths", "💧"),
            remedy(
                "Warm Salt Gargle",
                "Mix 1/4 tsp salt in warm water, gargle for sore throat",
                "🧂",
            ),
            remedy(
                "Honey & Lemon",
                "Mix honey and lemon in warm water to soothe throat",
                "🍯",
            ),
            remedy(
                "Steam Inhalation",
                "Breathe in steam from hot water to clear congestion",
                "♨️",
            ),
        ],
        when_to_seek_help: strings(&[
            "Fever above 103°F (39.4°C)",
            "Symptoms lasting more than 10 days",
            "Difficulty breathing or chest pain",
            "Severe headache or neck stiffness",
        ]),
    }
}

fn digestive(severe_combo: bool) -> Assessment {
    Assessment {
        condition: "Digestive Upset / Gastroenteritis".to_string(),
        description: "Your symptoms suggest a digestive system issue, possibly viral \
                      gastroenteritis or food-related upset."
            .to_string(),
        severity: if severe_combo {
            TriageLevel::Moderate
        } else {
            TriageLevel::Low
        },
        medications: vec![
            med(
                "Pepto-Bismol",
                MedicationKind::Otc,
                "30ml or 2 tablets every 30-60 minutes as needed",
                &["May cause black stool", "Don't use for more than 2 days"],
            ),
            med(
                "Loperamide (Imodium)",
                MedicationKind::Otc,
                "4mg initially, then 2mg after each loose stool",
                &["Don't use if fever present", "Max 16mg per day"],
            ),
            med(
                "Ondansetron (Zofran)",
                MedicationKind::Prescription,
                "4-8mg every 8 hours as needed",
                &["May cause headache", "Consult doctor before use"],
            ),
        ],
        remedies: vec![
            remedy("BRAT Diet", "Eat bananas, rice, applesauce, and toast", "🍌"),
            remedy(
                "Clear Fluids",
                "Sip water, clear broth, or electrolyte drinks",
                "💧",
            ),
            remedy("Ginger Tea", "Drink ginger tea to help settle your stomach", "🫚"),
            remedy("Peppermint", "Peppermint tea or candy can help with nausea", "🌿"),
            remedy(
                "Avoid Dairy & Fatty Foods",
                "Skip these until symptoms improve",
                "🚫",
            ),
        ],
        when_to_seek_help: strings(&[
            "Blood in vomit or stool",
            "Signs of dehydration (extreme thirst, dark urine)",
            "Severe abdominal pain",
            "Symptoms lasting more than 3 days",
            "High fever (above 102°F / 38.9°C)",
        ]),
    }
}

fn pain(is_migraine: bool) -> Assessment {
    let mut medications = vec![
        med(
            "Ibuprofen (Advil, Motrin)",
            MedicationKind::Otc,
            "200-400mg every 4-6 hours with food",
            &["Take with food", "Not for long-term use"],
        ),
        med(
            "Acetaminophen (Tylenol)",
            MedicationKind::Otc,
            "500-1000mg every 4-6 hours",
            &["Do not exceed 4000mg daily", "Avoid with alcohol"],
        ),
        med(
            "Naproxen (Aleve)",
            MedicationKind::Otc,
            "220mg every 8-12 hours",
            &["Take with food", "May cause stomach upset"],
        ),
    ];
    if is_migraine {
        medications.push(med(
            "Excedrin Migraine",
            MedicationKind::Otc,
            "2 caplets at first sign of migraine",
            &["Contains caffeine", "Don't use more than 2 days per week"],
        ));
    }

    Assessment {
        condition: if is_migraine {
            "Migraine Headache".to_string()
        } else {
            "General Pain & Discomfort".to_string()
        },
        description: if is_migraine {
            "Your symptoms suggest a migraine, which may cause severe throbbing pain, often \
             on one side of the head."
                .to_string()
        } else {
            "Your symptoms indicate musculoskeletal or general pain that can often be managed \
             with rest and appropriate treatment."
                .to_string()
        },
        severity: if is_migraine {
            TriageLevel::Moderate
        } else {
            TriageLevel::Low
        },
        medications,
        remedies: vec![
            remedy(
                "Apply Ice or Heat",
                "Use ice pack for acute pain, heat for muscle tension",
                "🧊",
            ),
            remedy(
                "Rest in Dark Room",
                "For migraines, rest in a quiet, dark room",
                "🌙",
            ),
            remedy(
                "Gentle Stretching",
                "Light stretches can help relieve muscle tension",
                "🧘",
            ),
            remedy(
                "Stay Hydrated",
                "Dehydration can worsen headaches and muscle cramps",
                "💧",
            ),
            remedy("Massage", "Gentle massage can help relieve muscle tension", "💆"),
        ],
        when_to_seek_help: strings(&[
            "Sudden, severe headache unlike any before",
            "Pain accompanied by fever or stiff neck",
            "Pain that doesn't improve with treatment",
            "Numbness, weakness, or vision changes",
        ]),
    }
}

fn skin(has_hives: bool) -> Assessment {
    Assessment {
        condition: "Allergic Reaction / Skin Irritation".to_string(),
        description: "Your symptoms suggest an allergic reaction or skin irritation. Monitor \
                      for any worsening symptoms."
            .to_string(),
        severity: if has_hives {
            TriageLevel::Moderate
        } else {
            TriageLevel::Low
        },
        medications: vec![
            med(
                "Diphenhydramine (Benadryl)",
                MedicationKind::Otc,
                "25-50mg every 4-6 hours",
                &["Causes drowsiness", "Don't drive after taking"],
            ),
            med(
                "Cetirizine (Zyrtec)",
                MedicationKind::Otc,
                "10mg once daily",
                &["May cause mild drowsiness", "Take at same time daily"],
            ),
            med(
                "Hydrocortisone Cream 1%",
                MedicationKind::Otc,
                "Apply thin layer to affected area 2-4 times daily",
                &[
                    "Don't use on face for extended periods",
                    "Not for deep wounds",
                ],
            ),
            med(
                "Calamine Lotion",
                MedicationKind::Otc,
                "Apply to affected areas as needed",
                &["For external use only", "Avoid eyes and mouth"],
            ),
        ],
        remedies: vec![
            remedy("Cool Compress", "Apply cool, damp cloth to affected areas", "🧊"),
            remedy("Oatmeal Bath", "Add colloidal oatmeal to lukewarm bath", "🛁"),
            remedy(
                "Avoid Scratching",
                "Keep nails short and try not to scratch",
                "✋",
            ),
            remedy("Wear Loose Clothing", "Choose soft, breathable fabrics", "👕"),
            remedy(
                "Identify Triggers",
                "Note any new products or foods that may have caused the reaction",
                "📝",
            ),
        ],
        when_to_seek_help: strings(&[
            "Difficulty breathing or swallowing",
            "Swelling of face, lips, or tongue",
            "Rash spreading rapidly",
            "Fever accompanying the rash",
            "Symptoms not improving after 48 hours",
        ]),
    }
}

fn general() -> Assessment {
    Assessment {
        condition: "General Symptoms".to_string(),
        description: "Based on your selected symptoms, here are some general recommendations. \
                      If symptoms persist or worsen, consult a healthcare provider."
            .to_string(),
        severity: TriageLevel::Low,
        medications: vec![
            med(
                "Acetaminophen (Tylenol)",
                MedicationKind::Otc,
                "500-1000mg every 4-6 hours as needed",
                &["Do not exceed 4000mg in 24 hours", "Avoid alcohol"],
            ),
            med(
                "Ibuprofen (Advil)",
                MedicationKind::Otc,
                "200-400mg every 4-6 hours with food",
                &["Take with food", "Not for those with stomach ulcers"],
            ),
        ],
        remedies: vec![
            remedy("Get Adequate Rest", "Allow your body time to recover", "😴"),
            remedy("Stay Hydrated", "Drink plenty of water and clear fluids", "💧"),
            remedy(
                "Monitor Symptoms",
                "Keep track of any changes in your symptoms",
                "📝",
            ),
            remedy("Healthy Diet", "Eat nutritious foods to support recovery", "🥗"),
        ],
        when_to_seek_help: strings(&[
            "Symptoms worsen or don't improve",
            "New symptoms develop",
            "High fever develops",
            "You're unsure about your condition",
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_cold_flu_symptoms_yield_cold_or_flu() {
        let result = assess(&["cough", "sore-throat", "runny-nose"]);
        assert_eq!(result.condition, "Common Cold or Flu");
        assert_eq!(result.severity, TriageLevel::Low);
    }

    #[test]
    fn test_fever_escalates_cold_flu_to_moderate() {
        let result = assess(&["cough", "sore-throat", "fever"]);
        assert_eq!(result.condition, "Common Cold or Flu");
        assert_eq!(result.severity, TriageLevel::Moderate);
    }

    #[test]
    fn test_two_cold_flu_symptoms_fall_through() {
        let result = assess(&["cough", "chills"]);
        assert_eq!(result.condition, "General Symptoms");
    }

    #[test]
    fn test_chest_tightness_is_emergency() {
        let result = assess(&["chest-tightness"]);
        assert_eq!(result.severity, TriageLevel::Emergency);
        assert!(result.medications.is_empty());
    }

    #[test]
    fn test_emergency_takes_priority_over_cold_flu() {
        let result = assess(&["cough", "sore-throat", "fever", "shortness-breath"]);
        assert_eq!(result.condition, "Potential Emergency Condition");
    }

    #[test]
    fn test_confusion_is_emergency() {
        let result = assess(&["confusion", "headache"]);
        assert_eq!(result.severity, TriageLevel::Emergency);
    }

    #[test]
    fn test_two_digestive_symptoms() {
        let result = assess(&["nausea", "bloating"]);
        assert_eq!(result.condition, "Digestive Upset / Gastroenteritis");
        assert_eq!(result.severity, TriageLevel::Low);
    }

    #[test]
    fn test_vomiting_and_diarrhea_escalate_digestive() {
        let result = assess(&["vomiting", "diarrhea"]);
        assert_eq!(result.severity, TriageLevel::Moderate);
    }

    #[test]
    fn test_single_digestive_symptom_is_not_digestive() {
        let result = assess(&["nausea"]);
        assert_eq!(result.condition, "General Symptoms");
    }

    #[test]
    fn test_migraine_template_and_extra_medication() {
        let result = assess(&["migraine"]);
        assert_eq!(result.condition, "Migraine Headache");
        assert_eq!(result.severity, TriageLevel::Moderate);
        assert!(result
            .medications
            .iter()
            .any(|m| m.name == "Excedrin Migraine"));
    }

    #[test]
    fn test_plain_headache_is_general_pain() {
        let result = assess(&["headache"]);
        assert_eq!(result.condition, "General Pain & Discomfort");
        assert_eq!(result.severity, TriageLevel::Low);
        assert!(!result
            .medications
            .iter()
            .any(|m| m.name == "Excedrin Migraine"));
    }

    #[test]
    fn test_skin_rule_and_hives_escalation() {
        let low = assess(&["rash"]);
        assert_eq!(low.condition, "Allergic Reaction / Skin Irritation");
        assert_eq!(low.severity, TriageLevel::Low);

        let moderate = assess(&["rash", "hives"]);
        assert_eq!(moderate.severity, TriageLevel::Moderate);
    }

    #[test]
    fn test_unknown_ids_silently_ignored() {
        let result = assess(&["not-a-symptom", "migraine", "also-unknown"]);
        assert_eq!(result.condition, "Migraine Headache");
    }

    #[test]
    fn test_entirely_unknown_selection_is_general() {
        let result = assess(&["bogus", "made-up"]);
        assert_eq!(result.condition, "General Symptoms");
        assert_eq!(result.severity, TriageLevel::Low);
    }

    #[test]
    fn test_empty_selection_is_general() {
        let result = assess(&[]);
        assert_eq!(result.condition, "General Symptoms");
    }

    #[test]
    fn test_prescription_kind_present_in_digestive() {
        let result = assess(&["vomiting", "stomach-pain"]);
        assert!(result
            .medications
            .iter()
            .any(|m| m.kind == MedicationKind::Prescription));
    }
}
