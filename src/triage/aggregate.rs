//! Final assembly of a triage result. Red flags are an absolute
//! floor, rationale keeps first occurrences in a fixed order, and the
//! level's default action always leads the action list.

use std::collections::HashSet;

use crate::models::{IntakeRecord, TriageLevel};

use super::messages::TriageMessages;
use super::red_flags::RedFlagRule;
use super::types::{DomainAssessment, TriageResult};

/// Combine red-flag screening, the domain assessment, and any
/// data-quality notes into the deterministic result.
pub fn aggregate(
    record: &IntakeRecord,
    flags: &[&'static RedFlagRule],
    assessment: DomainAssessment,
    quality_notes: &[String],
) -> TriageResult {
    let floor = if flags.is_empty() {
        TriageLevel::SelfCare
    } else {
        TriageLevel::Emergency
    };
    let triage_level = floor.max(assessment.severity);

    let mut rationale: Vec<String> = flags
        .iter()
        .map(|rule| (rule.message)(record))
        .collect();
    rationale.extend(assessment.rationale);
    rationale.extend(quality_notes.iter().cloned());

    let mut actions = vec![TriageMessages::default_action(triage_level).to_string()];
    for rule in flags {
        actions.extend(rule.actions.iter().map(|a| a.to_string()));
    }
    actions.extend(assessment.actions);

    let mut condition_hints: Vec<String> = flags
        .iter()
        .flat_map(|rule| rule.hints.iter().map(|h| h.to_string()))
        .collect();
    condition_hints.extend(assessment.condition_hints);

    TriageResult {
        triage_level,
        rationale: dedup_keep_first(rationale),
        actions: dedup_keep_first(actions),
        condition_hints: dedup_keep_first(condition_hints),
    }
}

/// Drop exact duplicates, keeping the first occurrence so the most
/// severe source of a line decides its position.
pub(crate) fn dedup_keep_first(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
