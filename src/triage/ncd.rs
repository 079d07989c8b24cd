//! NCD domain scoring. Blood pressure and glucose are scored
//! independently against their band tables and the assessment keeps
//! the worst severity seen, never an average.

use crate::models::{Context, IntakeRecord, TriageLevel};

use super::context::apply_context;
use super::messages::TriageMessages;
use super::reference::{
    BpBand, BP_BANDS, BP_ELEVATED_SYS, GLUCOSE_BANDS, GLUCOSE_CRITICAL_LOW, HINT_HYPOGLYCEMIA,
};
use super::types::DomainAssessment;

/// Score an NCD intake. Missing vitals produce an explanatory note and
/// no escalation; the record is scored on whatever is present.
pub fn evaluate_ncd(record: &IntakeRecord, context: Option<&Context>) -> DomainAssessment {
    let mut out = DomainAssessment::new();

    score_blood_pressure(record, &mut out);
    score_glucose(record, &mut out);

    if !record.has_ncd_vitals() {
        out.note(TriageMessages::missing_ncd_vitals());
    }

    if let Some(ctx) = context {
        apply_context(ctx, &mut out);
    }

    out
}

/// First matching band wins; the tables are ordered most severe
/// first. A reading below every band but at or above the elevated
/// threshold still gets a monitoring note.
fn score_blood_pressure(record: &IntakeRecord, out: &mut DomainAssessment) {
    let sys = record.systolic();
    let dia = record.diastolic();
    if sys.is_none() && dia.is_none() {
        return;
    }

    match BP_BANDS.iter().find(|band| bp_band_matches(band, sys, dia)) {
        Some(band) => {
            out.raise_to(band.severity);
            out.note((band.message)(sys, dia));
            if let Some(hint) = band.hint {
                out.hint(hint);
            }
        }
        None => {
            if let Some(s) = sys {
                if s >= BP_ELEVATED_SYS {
                    out.note(TriageMessages::bp_elevated(s));
                }
            }
        }
    }
}

fn bp_band_matches(band: &BpBand, sys: Option<f64>, dia: Option<f64>) -> bool {
    sys.is_some_and(|s| s >= band.min_sys) || dia.is_some_and(|d| d >= band.min_dia)
}

fn score_glucose(record: &IntakeRecord, out: &mut DomainAssessment) {
    let Some(glucose) = record.glucose_level() else {
        return;
    };

    if glucose <= GLUCOSE_CRITICAL_LOW {
        out.raise_to(TriageLevel::Emergency);
        out.note(TriageMessages::severe_hypoglycemia(glucose));
        out.hint(HINT_HYPOGLYCEMIA);
        return;
    }

    if let Some(band) = GLUCOSE_BANDS.iter().find(|band| glucose >= band.min) {
        out.raise_to(band.severity);
        out.note((band.message)(glucose));
        if let Some(hint) = band.hint {
            out.hint(hint);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::{BoundedValue, ClinicalDomain, Sex};

    fn record(sys: Option<f64>, dia: Option<f64>, glucose: Option<f64>) -> IntakeRecord {
        IntakeRecord {
            age: 48,
            sex: Sex::Female,
            domain: ClinicalDomain::Ncd,
            primary_symptom: "fatigue".into(),
            duration_days: Some(5),
            bp_sys: sys.map(BoundedValue::exact),
            bp_dia: dia.map(BoundedValue::exact),
            glucose: glucose.map(BoundedValue::exact),
            weight: None,
            phq9: None,
            gad7: None,
            red_flag_answers: HashMap::new(),
        }
    }

    #[test]
    fn crisis_bp_scores_emergency() {
        let out = evaluate_ncd(&record(Some(182.0), Some(121.0), None), None);
        assert_eq!(out.severity, TriageLevel::Emergency);
        assert!(out.rationale[0].contains("182/121"));
        assert_eq!(out.condition_hints, vec!["hypertensive crisis".to_string()]);
    }

    #[test]
    fn stage_two_bp_scores_urgent() {
        let out = evaluate_ncd(&record(Some(165.0), Some(95.0), None), None);
        assert_eq!(out.severity, TriageLevel::Urgent);
    }

    #[test]
    fn stage_one_bp_scores_primary_care() {
        let out = evaluate_ncd(&record(Some(145.0), Some(88.0), None), None);
        assert_eq!(out.severity, TriageLevel::PrimaryCare);
        assert_eq!(
            out.condition_hints,
            vec!["uncontrolled hypertension".to_string()]
        );
    }

    #[test]
    fn diastolic_alone_can_match_a_band() {
        let out = evaluate_ncd(&record(None, Some(102.0), None), None);
        assert_eq!(out.severity, TriageLevel::Urgent);
    }

    #[test]
    fn elevated_bp_notes_without_escalating() {
        let out = evaluate_ncd(&record(Some(125.0), Some(75.0), None), None);
        assert_eq!(out.severity, TriageLevel::SelfCare);
        assert!(out.rationale[0].contains("elevated"));
    }

    #[test]
    fn normal_bp_is_silent() {
        let out = evaluate_ncd(&record(Some(118.0), Some(76.0), Some(95.0)), None);
        assert_eq!(out.severity, TriageLevel::SelfCare);
        assert!(out.rationale.is_empty());
    }

    #[test]
    fn band_thresholds_are_inclusive() {
        assert_eq!(
            evaluate_ncd(&record(Some(140.0), None, None), None).severity,
            TriageLevel::PrimaryCare
        );
        assert_eq!(
            evaluate_ncd(&record(None, None, Some(180.0)), None).severity,
            TriageLevel::PrimaryCare
        );
    }

    #[test]
    fn glucose_bands_cover_all_levels() {
        assert_eq!(
            evaluate_ncd(&record(None, None, Some(420.0)), None).severity,
            TriageLevel::Emergency
        );
        assert_eq!(
            evaluate_ncd(&record(None, None, Some(320.0)), None).severity,
            TriageLevel::Urgent
        );
        assert_eq!(
            evaluate_ncd(&record(None, None, Some(200.0)), None).severity,
            TriageLevel::PrimaryCare
        );
        let mild = evaluate_ncd(&record(None, None, Some(150.0)), None);
        assert_eq!(mild.severity, TriageLevel::SelfCare);
        assert!(mild.rationale[0].contains("mildly elevated"));
    }

    #[test]
    fn hypoglycemia_scores_emergency() {
        let out = evaluate_ncd(&record(None, None, Some(55.0)), None);
        assert_eq!(out.severity, TriageLevel::Emergency);
        assert_eq!(out.condition_hints, vec!["hypoglycemia".to_string()]);
    }

    #[test]
    fn worst_vital_wins_over_milder_ones() {
        // Crisis BP with normal glucose stays Emergency.
        let out = evaluate_ncd(&record(Some(190.0), Some(100.0), Some(98.0)), None);
        assert_eq!(out.severity, TriageLevel::Emergency);

        // Stage 1 BP with very high glucose takes the glucose severity.
        let out = evaluate_ncd(&record(Some(145.0), None, Some(320.0)), None);
        assert_eq!(out.severity, TriageLevel::Urgent);
        assert_eq!(out.rationale.len(), 2);
    }

    #[test]
    fn missing_vitals_note_without_escalation() {
        let out = evaluate_ncd(&record(None, None, None), None);
        assert_eq!(out.severity, TriageLevel::SelfCare);
        assert_eq!(out.rationale.len(), 1);
        assert!(out.rationale[0].contains("No blood pressure or glucose"));
    }

    #[test]
    fn context_escalates_banded_severity() {
        let ctx = Context {
            comorbidities: vec!["ckd".to_string()],
            medications: Vec::new(),
            allergies: Vec::new(),
        };
        let out = evaluate_ncd(&record(Some(145.0), None, None), Some(&ctx));
        assert_eq!(out.severity, TriageLevel::Urgent);
    }
}
