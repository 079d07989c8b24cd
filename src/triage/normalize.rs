//! Intake validation and canonicalization. Structural problems (age,
//! symptom, duration) reject the record; implausible measurements are
//! clamped and flagged so an otherwise analyzable record is not lost.

use crate::models::{BoundedValue, ClinicalDomain, IntakeRecord, RawIntake};

use super::messages::TriageMessages;
use super::reference::{
    GAD7_MAX, MAX_AGE, PHQ9_MAX, PLAUSIBLE_BP_DIA, PLAUSIBLE_BP_SYS, PLAUSIBLE_GLUCOSE,
    PLAUSIBLE_WEIGHT,
};
use super::ValidationError;

/// Validate a raw intake into a canonical record plus data-quality
/// notes. Measurements belonging to the other domain are dropped, not
/// validated. Notes are surfaced by the aggregator at the end of the
/// rationale list.
pub fn normalize_intake(
    raw: &RawIntake,
) -> Result<(IntakeRecord, Vec<String>), ValidationError> {
    if raw.age < 0 || raw.age > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange(raw.age));
    }
    let symptom = raw.primary_symptom.trim();
    if symptom.is_empty() {
        return Err(ValidationError::MissingPrimarySymptom);
    }
    if let Some(days) = raw.duration_days {
        if days < 0 {
            return Err(ValidationError::NegativeDuration(days));
        }
    }

    let mut notes = Vec::new();

    let (bp_sys, bp_dia, glucose, weight, phq9, gad7) = match raw.domain {
        ClinicalDomain::Ncd => (
            check_measurement(
                raw.bp_sys,
                "bp_sys",
                "systolic blood pressure",
                PLAUSIBLE_BP_SYS,
                &mut notes,
            )?,
            check_measurement(
                raw.bp_dia,
                "bp_dia",
                "diastolic blood pressure",
                PLAUSIBLE_BP_DIA,
                &mut notes,
            )?,
            check_measurement(
                raw.glucose,
                "glucose",
                "blood glucose",
                PLAUSIBLE_GLUCOSE,
                &mut notes,
            )?,
            check_measurement(raw.weight, "weight", "weight", PLAUSIBLE_WEIGHT, &mut notes)?,
            None,
            None,
        ),
        ClinicalDomain::MentalHealth => (
            None,
            None,
            None,
            None,
            check_score(raw.phq9, "phq9", "PHQ-9 score", PHQ9_MAX, &mut notes),
            check_score(raw.gad7, "gad7", "GAD-7 score", GAD7_MAX, &mut notes),
        ),
    };

    let record = IntakeRecord {
        age: raw.age as u32,
        sex: raw.sex,
        domain: raw.domain,
        primary_symptom: symptom.to_string(),
        duration_days: raw.duration_days.map(|d| d as u32),
        bp_sys,
        bp_dia,
        glucose,
        weight,
        phq9,
        gad7,
        red_flag_answers: raw.red_flag_answers.clone(),
    };

    Ok((record, notes))
}

/// Plausibility-check one optional measurement. Non-finite values are
/// malformed input and reject the record; out-of-range values are
/// clamped to the nearest bound with a data-quality note.
fn check_measurement(
    value: Option<f64>,
    field: &'static str,
    display: &'static str,
    (low, high): (f64, f64),
    notes: &mut Vec<String>,
) -> Result<Option<BoundedValue<f64>>, ValidationError> {
    let Some(given) = value else {
        return Ok(None);
    };
    if !given.is_finite() {
        return Err(ValidationError::NonFiniteMeasurement(field));
    }
    let bounded = if given < low {
        clamp_warn(field, display, given, low, low, high, notes)
    } else if given > high {
        clamp_warn(field, display, given, high, low, high, notes)
    } else {
        BoundedValue::exact(given)
    };
    Ok(Some(bounded))
}

/// Clamp one optional questionnaire score into 0..=max.
fn check_score(
    value: Option<i64>,
    field: &'static str,
    display: &'static str,
    max: u8,
    notes: &mut Vec<String>,
) -> Option<BoundedValue<u8>> {
    let given = value?;
    let bounded = if given < 0 {
        clamp_warn(field, display, given as f64, 0.0, 0.0, f64::from(max), notes);
        BoundedValue::clamped(0)
    } else if given > i64::from(max) {
        clamp_warn(
            field,
            display,
            given as f64,
            f64::from(max),
            0.0,
            f64::from(max),
            notes,
        );
        BoundedValue::clamped(max)
    } else {
        BoundedValue::exact(given as u8)
    };
    Some(bounded)
}

fn clamp_warn(
    field: &'static str,
    display: &'static str,
    given: f64,
    clamped_to: f64,
    low: f64,
    high: f64,
    notes: &mut Vec<String>,
) -> BoundedValue<f64> {
    tracing::warn!(
        field,
        given,
        clamped_to,
        "measurement outside plausible range, clamped"
    );
    notes.push(TriageMessages::clamped_value(display, given, low, high));
    BoundedValue::clamped(clamped_to)
}
