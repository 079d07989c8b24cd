//! Wire types for the advisory exchange.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ClinicalDomain, IntakeRecord, Sex, TriageLevel};

use super::AdvisoryError;

/// De-identified intake sent out for a second opinion. The snapshot
/// carries measurements and the draft level only; the reference is a
/// fresh v4 UUID minted per consultation, so two submissions of the
/// same person cannot be joined on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisorySnapshot {
    pub reference: Uuid,
    pub age: u32,
    pub sex: Sex,
    pub domain: ClinicalDomain,
    pub primary_symptom: String,
    pub duration_days: Option<u32>,
    pub bp_sys: Option<f64>,
    pub bp_dia: Option<f64>,
    pub glucose: Option<f64>,
    pub weight: Option<f64>,
    pub phq9: Option<u8>,
    pub gad7: Option<u8>,
    pub draft_level: TriageLevel,
}

impl AdvisorySnapshot {
    pub fn from_record(record: &IntakeRecord, draft_level: TriageLevel) -> Self {
        Self {
            reference: Uuid::new_v4(),
            age: record.age,
            sex: record.sex,
            domain: record.domain,
            primary_symptom: record.primary_symptom.clone(),
            duration_days: record.duration_days,
            bp_sys: record.systolic(),
            bp_dia: record.diastolic(),
            glucose: record.glucose_level(),
            weight: record.weight.map(|b| b.value),
            phq9: record.phq9_score(),
            gad7: record.gad7_score(),
            draft_level,
        }
    }
}

/// Advisory verdict. Every field is required; a response missing any
/// of them is malformed and the whole opinion is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisoryOpinion {
    pub triage_level: TriageLevel,
    pub rationale: Vec<String>,
    pub condition_hints: Vec<String>,
    pub actions: Vec<String>,
}

/// Transport seam so the engine can be exercised without a live
/// service.
pub trait AdvisoryClient {
    fn consult(&self, snapshot: &AdvisorySnapshot) -> Result<AdvisoryOpinion, AdvisoryError>;
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::BoundedValue;

    fn record() -> IntakeRecord {
        IntakeRecord {
            age: 35,
            sex: Sex::Male,
            domain: ClinicalDomain::Ncd,
            primary_symptom: "dizziness".into(),
            duration_days: Some(2),
            bp_sys: Some(BoundedValue::exact(182.0)),
            bp_dia: Some(BoundedValue::exact(121.0)),
            glucose: Some(BoundedValue::clamped(800.0)),
            weight: None,
            phq9: None,
            gad7: None,
            red_flag_answers: HashMap::from([("self_harm".to_string(), true)]),
        }
    }

    #[test]
    fn snapshot_mints_a_fresh_reference_per_consultation() {
        let record = record();
        let a = AdvisorySnapshot::from_record(&record, TriageLevel::Urgent);
        let b = AdvisorySnapshot::from_record(&record, TriageLevel::Urgent);
        assert_ne!(a.reference, b.reference);
    }

    #[test]
    fn snapshot_flattens_bounded_measurements() {
        let snapshot = AdvisorySnapshot::from_record(&record(), TriageLevel::Emergency);
        assert_eq!(snapshot.bp_sys, Some(182.0));
        assert_eq!(snapshot.glucose, Some(800.0));
        assert_eq!(snapshot.weight, None);
        assert_eq!(snapshot.draft_level, TriageLevel::Emergency);
    }

    #[test]
    fn snapshot_serializes_wire_vocabulary() {
        let snapshot = AdvisorySnapshot::from_record(&record(), TriageLevel::Urgent);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["sex"], "male");
        assert_eq!(json["domain"], "ncd");
        assert_eq!(json["draft_level"], "urgent");
        // Screening answers never leave the process.
        assert!(json.get("red_flag_answers").is_none());
    }

    #[test]
    fn opinion_parses_complete_payload() {
        let opinion: AdvisoryOpinion = serde_json::from_str(
            r#"{
                "triage_level": "urgent",
                "rationale": ["pattern consistent with uncontrolled hypertension"],
                "condition_hints": ["uncontrolled hypertension"],
                "actions": ["arrange clinical review within 24 hours"]
            }"#,
        )
        .unwrap();
        assert_eq!(opinion.triage_level, TriageLevel::Urgent);
        assert_eq!(opinion.rationale.len(), 1);
    }

    #[test]
    fn opinion_rejects_missing_fields() {
        let result = serde_json::from_str::<AdvisoryOpinion>(
            r#"{"triage_level": "urgent", "rationale": []}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn opinion_rejects_unknown_level() {
        let result = serde_json::from_str::<AdvisoryOpinion>(
            r#"{
                "triage_level": "panic",
                "rationale": [],
                "condition_hints": [],
                "actions": []
            }"#,
        );
        assert!(result.is_err());
    }
}
