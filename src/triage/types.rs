use serde::{Deserialize, Serialize};

use crate::models::TriageLevel;

// ---------------------------------------------------------------------------
// TriageResult
// ---------------------------------------------------------------------------

/// Final triage artifact. Created fresh per analyze call and never
/// persisted here; identical input always yields an identical result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub triage_level: TriageLevel,
    /// One entry per triggered rule, in evaluation order: red flags
    /// first, then domain findings, then data-quality notes.
    pub rationale: Vec<String>,
    /// Recommended next steps, deduplicated keeping first occurrence.
    pub actions: Vec<String>,
    /// Suspected condition labels; may be empty.
    pub condition_hints: Vec<String>,
}

// ---------------------------------------------------------------------------
// DomainAssessment
// ---------------------------------------------------------------------------

/// Intermediate output of one domain rule engine, before red-flag floor
/// and action lookup are applied by the aggregator.
#[derive(Debug, Clone)]
pub struct DomainAssessment {
    pub severity: TriageLevel,
    pub rationale: Vec<String>,
    pub actions: Vec<String>,
    pub condition_hints: Vec<String>,
}

impl DomainAssessment {
    pub fn new() -> Self {
        Self {
            severity: TriageLevel::SelfCare,
            rationale: Vec::new(),
            actions: Vec::new(),
            condition_hints: Vec::new(),
        }
    }

    /// Raise severity to `level` if it is higher; never lowers.
    pub fn raise_to(&mut self, level: TriageLevel) {
        if level > self.severity {
            self.severity = level;
        }
    }

    /// One step up the urgency ladder, saturating at Emergency.
    pub fn escalate(&mut self) {
        self.severity = self.severity.escalate();
    }

    pub fn note(&mut self, rationale: String) {
        self.rationale.push(rationale);
    }

    pub fn hint(&mut self, hint: &str) {
        self.condition_hints.push(hint.to_string());
    }
}

impl Default for DomainAssessment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_to_never_lowers() {
        let mut assessment = DomainAssessment::new();
        assessment.raise_to(TriageLevel::Urgent);
        assessment.raise_to(TriageLevel::PrimaryCare);
        assert_eq!(assessment.severity, TriageLevel::Urgent);
    }

    #[test]
    fn escalate_steps_one_level() {
        let mut assessment = DomainAssessment::new();
        assessment.escalate();
        assert_eq!(assessment.severity, TriageLevel::PrimaryCare);
        assessment.raise_to(TriageLevel::Emergency);
        assessment.escalate();
        assert_eq!(assessment.severity, TriageLevel::Emergency);
    }
}
