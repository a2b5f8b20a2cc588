//! Triage use case. Validates the selection and runs the rule engine.
//!
//! Unknown ids are dropped by the rules themselves; this layer logs what
//! was ignored so a bad caller is visible in the logs.

use crate::domain::{catalog, triage, Assessment};
use tracing::{info, warn};

/// Service wrapping the triage rules.
pub struct TriageService;

impl TriageService {
    pub fn new() -> Self {
        Self
    }

    /// Run the rules over a selection. Ids not present in the catalog are
    /// ignored.
    pub fn analyze(&self, selected_ids: &[&str]) -> Assessment {
        let unknown: Vec<&str> = selected_ids
            .iter()
            .copied()
            .filter(|id| catalog::find(id).is_none())
            .collect();
        if !unknown.is_empty() {
            warn!(ids = ?unknown, "ignoring unknown symptom ids");
        }

        let assessment = triage::assess(selected_ids);
        info!(
            selected = selected_ids.len() - unknown.len(),
            condition = %assessment.condition,
            severity = %assessment.severity.label(),
            "triage complete"
        );
        assessment
    }
}

impl Default for TriageService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TriageLevel;

    #[test]
    fn test_analyze_runs_rules() {
        let service = TriageService::new();
        let result = service.analyze(&["chest-tightness"]);
        assert_eq!(result.severity, TriageLevel::Emergency);
    }

    #[test]
    fn test_analyze_tolerates_unknown_ids() {
        let service = TriageService::new();
        let result = service.analyze(&["nope", "migraine"]);
        assert_eq!(result.condition, "Migraine Headache");
    }
}
