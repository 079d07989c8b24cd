//! Context escalation. Comorbidities, medications, and allergy
//! conflicts can push a domain assessment one level up; context never
//! lowers a level.

use crate::models::Context;

use super::messages::{TriageMessages, ACTION_REVIEW_MEDS};
use super::reference::{
    comorbidity_risk, is_allergy_conflict, medication_note, ComorbidityRisk,
};
use super::types::DomainAssessment;

/// Fold the clinical context into an assessment. High-risk
/// comorbidities and allergy conflicts each contribute at most one
/// escalation step, so a record with three high-risk conditions rises
/// one level, not three.
pub fn apply_context(context: &Context, assessment: &mut DomainAssessment) {
    let mut high_risk_seen = false;
    for code in &context.comorbidities {
        match comorbidity_risk(code) {
            Some(ComorbidityRisk::High) => {
                assessment.note(TriageMessages::high_risk_comorbidity(code));
                high_risk_seen = true;
            }
            Some(ComorbidityRisk::Moderate) => {
                assessment.note(TriageMessages::moderate_comorbidity(code));
            }
            None => {}
        }
    }
    if high_risk_seen {
        assessment.escalate();
    }

    for medication in &context.medications {
        if let Some(note) = medication_note(medication) {
            assessment.note(note.note.to_string());
            if let Some(hint) = note.hint {
                assessment.hint(hint);
            }
        }
    }

    let mut conflict_seen = false;
    for allergen in &context.allergies {
        for medication in &context.medications {
            if is_allergy_conflict(allergen, medication) {
                assessment.note(TriageMessages::allergy_conflict(allergen, medication));
                assessment.actions.push(ACTION_REVIEW_MEDS.to_string());
                conflict_seen = true;
            }
        }
    }
    if conflict_seen {
        assessment.escalate();
    }
}
