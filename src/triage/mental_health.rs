//! Mental-health domain scoring over PHQ-9 and GAD-7 instrument
//! totals. Each score is banded independently and the worst severity
//! wins; symptom persistence adds a note, not a level.

use crate::models::{Context, IntakeRecord};

use super::context::apply_context;
use super::messages::TriageMessages;
use super::reference::{
    GAD7_BANDS, GAD7_HINT_MIN, HINT_ANXIETY_DISORDER, HINT_DEPRESSIVE_EPISODE,
    MH_PERSISTENCE_DAYS, PHQ9_BANDS, PHQ9_HINT_MIN,
};
use super::types::DomainAssessment;

/// Score a mental-health intake. A record with neither instrument
/// total gets an explanatory note and stays at self-care; red-flag
/// screening still applies upstream.
pub fn evaluate_mental_health(
    record: &IntakeRecord,
    context: Option<&Context>,
) -> DomainAssessment {
    let mut out = DomainAssessment::new();

    if !record.has_mh_scores() {
        out.note(TriageMessages::missing_mh_scores());
    } else {
        if let Some(score) = record.phq9_score() {
            if let Some(band) = PHQ9_BANDS.iter().find(|band| score >= band.min) {
                out.raise_to(band.severity);
                out.note((band.message)(score));
            }
            if score >= PHQ9_HINT_MIN {
                out.hint(HINT_DEPRESSIVE_EPISODE);
            }
        }
        if let Some(score) = record.gad7_score() {
            if let Some(band) = GAD7_BANDS.iter().find(|band| score >= band.min) {
                out.raise_to(band.severity);
                out.note((band.message)(score));
            }
            if score >= GAD7_HINT_MIN {
                out.hint(HINT_ANXIETY_DISORDER);
            }
        }
        if let Some(days) = record.duration_days {
            if days >= MH_PERSISTENCE_DAYS && clinically_significant(record) {
                out.note(TriageMessages::symptom_persistence(days));
            }
        }
    }

    if let Some(ctx) = context {
        apply_context(ctx, &mut out);
    }

    out
}

/// Persistence only matters once at least one instrument is in the
/// moderate range.
fn clinically_significant(record: &IntakeRecord) -> bool {
    record.phq9_score().is_some_and(|s| s >= PHQ9_HINT_MIN)
        || record.gad7_score().is_some_and(|s| s >= GAD7_HINT_MIN)
}
