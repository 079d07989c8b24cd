use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::enums::{ClinicalDomain, Sex};

// ---------------------------------------------------------------------------
// RawIntake — wire-shaped input, validated by triage::normalize
// ---------------------------------------------------------------------------

/// Intake payload exactly as the request layer hands it over.
/// Nothing here is trusted: `triage::normalize_intake` turns it into an
/// [`IntakeRecord`] or rejects it with a `ValidationError`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIntake {
    pub age: i64,
    pub sex: Sex,
    pub domain: ClinicalDomain,
    pub primary_symptom: String,
    #[serde(default)]
    pub duration_days: Option<i64>,
    /// Systolic blood pressure in mmHg (NCD domain).
    #[serde(default)]
    pub bp_sys: Option<f64>,
    /// Diastolic blood pressure in mmHg (NCD domain).
    #[serde(default)]
    pub bp_dia: Option<f64>,
    /// Blood glucose in mg/dL (NCD domain).
    #[serde(default)]
    pub glucose: Option<f64>,
    /// Body weight in kg (NCD domain).
    #[serde(default)]
    pub weight: Option<f64>,
    /// PHQ-9 depression score, 0-27 (MH domain).
    #[serde(default)]
    pub phq9: Option<i64>,
    /// GAD-7 anxiety score, 0-21 (MH domain).
    #[serde(default)]
    pub gad7: Option<i64>,
    /// Named boolean screening answers, at minimum `self_harm`.
    /// Keys the red-flag table does not know are ignored.
    #[serde(default)]
    pub red_flag_answers: HashMap<String, bool>,
    /// Opt-in for the external advisory connector. Off by default; when
    /// on, advisory failure is indistinguishable from off.
    #[serde(default)]
    pub allow_external_fallback: bool,
}

// ---------------------------------------------------------------------------
// BoundedValue — a measurement that survived plausibility clamping
// ---------------------------------------------------------------------------

/// A numeric value after plausibility checking. `clamped` marks values
/// that were pulled back inside the plausible range; the normalizer
/// reports those as data-quality notes so the clinical rationale stays
/// honest about its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundedValue<T> {
    pub value: T,
    pub clamped: bool,
}

impl<T> BoundedValue<T> {
    pub fn exact(value: T) -> Self {
        Self {
            value,
            clamped: false,
        }
    }

    pub fn clamped(value: T) -> Self {
        Self {
            value,
            clamped: true,
        }
    }
}

// ---------------------------------------------------------------------------
// IntakeRecord — canonical, validated intake
// ---------------------------------------------------------------------------

/// Canonical intake record produced by normalization. Measurements of
/// the record's own domain are present as plausibility-checked values;
/// measurements belonging to the other domain were dropped. `None`
/// always means "not provided", never zero.
#[derive(Debug, Clone)]
pub struct IntakeRecord {
    pub age: u32,
    pub sex: Sex,
    pub domain: ClinicalDomain,
    pub primary_symptom: String,
    pub duration_days: Option<u32>,
    pub bp_sys: Option<BoundedValue<f64>>,
    pub bp_dia: Option<BoundedValue<f64>>,
    pub glucose: Option<BoundedValue<f64>>,
    pub weight: Option<BoundedValue<f64>>,
    pub phq9: Option<BoundedValue<u8>>,
    pub gad7: Option<BoundedValue<u8>>,
    pub red_flag_answers: HashMap<String, bool>,
}

impl IntakeRecord {
    /// Screening answer for `name`; a missing key reads as `false`.
    pub fn red_flag(&self, name: &str) -> bool {
        self.red_flag_answers.get(name).copied().unwrap_or(false)
    }

    pub fn systolic(&self) -> Option<f64> {
        self.bp_sys.map(|b| b.value)
    }

    pub fn diastolic(&self) -> Option<f64> {
        self.bp_dia.map(|b| b.value)
    }

    pub fn glucose_level(&self) -> Option<f64> {
        self.glucose.map(|b| b.value)
    }

    pub fn phq9_score(&self) -> Option<u8> {
        self.phq9.map(|b| b.value)
    }

    pub fn gad7_score(&self) -> Option<u8> {
        self.gad7.map(|b| b.value)
    }

    /// Whether any rule-relevant NCD vital was provided (weight is
    /// tracked for trends, not acute scoring).
    pub fn has_ncd_vitals(&self) -> bool {
        self.bp_sys.is_some() || self.bp_dia.is_some() || self.glucose.is_some()
    }

    /// Whether any mental-health questionnaire score was provided.
    pub fn has_mh_scores(&self) -> bool {
        self.phq9.is_some() || self.gad7.is_some()
    }
}

// ---------------------------------------------------------------------------
// Context — optional comorbidity/medication/allergy enrichment
// ---------------------------------------------------------------------------

/// Optional enrichment for the rule engines. Absence never errors, it
/// only reduces rationale detail. Entries are matched case-insensitively
/// on trimmed tokens; order is preserved so rationale stays deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub comorbidities: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_record() -> IntakeRecord {
        IntakeRecord {
            age: 40,
            sex: Sex::Female,
            domain: ClinicalDomain::Ncd,
            primary_symptom: "headache".into(),
            duration_days: None,
            bp_sys: None,
            bp_dia: None,
            glucose: None,
            weight: None,
            phq9: None,
            gad7: None,
            red_flag_answers: HashMap::new(),
        }
    }

    #[test]
    fn red_flag_missing_key_is_false() {
        let mut record = minimal_record();
        assert!(!record.red_flag("self_harm"));
        record.red_flag_answers.insert("self_harm".into(), true);
        assert!(record.red_flag("self_harm"));
    }

    #[test]
    fn vital_accessors_unwrap_bounded_values() {
        let mut record = minimal_record();
        record.bp_sys = Some(BoundedValue::exact(132.0));
        record.phq9 = Some(BoundedValue::clamped(27));
        assert_eq!(record.systolic(), Some(132.0));
        assert_eq!(record.diastolic(), None);
        assert_eq!(record.phq9_score(), Some(27));
        assert!(record.has_ncd_vitals());
        assert!(record.has_mh_scores());
    }

    #[test]
    fn raw_intake_defaults_optional_fields() {
        let raw: RawIntake = serde_json::from_str(
            r#"{"age": 35, "sex": "male", "domain": "ncd", "primary_symptom": "dizziness"}"#,
        )
        .unwrap();
        assert_eq!(raw.age, 35);
        assert!(raw.bp_sys.is_none());
        assert!(raw.red_flag_answers.is_empty());
        assert!(!raw.allow_external_fallback);
    }

    #[test]
    fn context_defaults_empty() {
        let ctx: Context = serde_json::from_str("{}").unwrap();
        assert!(ctx.comorbidities.is_empty());
        assert!(ctx.medications.is_empty());
        assert!(ctx.allergies.is_empty());
    }
}
