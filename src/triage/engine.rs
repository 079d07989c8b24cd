//! Pipeline facade. `TriageEngine::analyze` is the one entry point
//! callers need; it owns stage ordering and the advisory merge rules.

use std::time::Instant;

use crate::advisory::{AdvisoryClient, AdvisoryOpinion, AdvisorySnapshot};
use crate::models::{ClinicalDomain, Context, IntakeRecord, RawIntake};

use super::aggregate::{aggregate, dedup_keep_first};
use super::mental_health::evaluate_mental_health;
use super::messages::TriageMessages;
use super::ncd::evaluate_ncd;
use super::normalize::normalize_intake;
use super::red_flags::evaluate_red_flags;
use super::types::TriageResult;
use super::ValidationError;

/// Stateless rule evaluation plus an optional advisory transport.
/// Identical input always produces an identical rule-based draft; the
/// advisory merge can raise the draft but never lower it.
pub struct TriageEngine {
    advisory: Option<Box<dyn AdvisoryClient>>,
}

impl TriageEngine {
    /// Engine without an advisory transport: rule-based results only.
    pub fn new() -> Self {
        Self { advisory: None }
    }

    /// Engine that consults `client` when an intake opts in via
    /// `allow_external_fallback`.
    pub fn with_advisory(client: Box<dyn AdvisoryClient>) -> Self {
        Self {
            advisory: Some(client),
        }
    }

    /// Run the full pipeline for one intake.
    pub fn analyze(
        &self,
        raw: &RawIntake,
        context: Option<&Context>,
    ) -> Result<TriageResult, ValidationError> {
        let start = Instant::now();

        let (record, quality_notes) = normalize_intake(raw)?;
        let flags = evaluate_red_flags(&record);
        let assessment = match record.domain {
            ClinicalDomain::Ncd => evaluate_ncd(&record, context),
            ClinicalDomain::MentalHealth => evaluate_mental_health(&record, context),
        };
        let draft = aggregate(&record, &flags, assessment, &quality_notes);

        let result = if raw.allow_external_fallback {
            self.consult_advisory(&record, draft)
        } else {
            draft
        };

        tracing::info!(
            domain = record.domain.as_str(),
            triage_level = result.triage_level.as_str(),
            red_flags = flags.len(),
            rationale_lines = result.rationale.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Triage analysis complete"
        );

        Ok(result)
    }

    /// Best-effort second opinion. Any failure logs a warning and
    /// returns the draft untouched, indistinguishable from the
    /// advisory being disabled.
    fn consult_advisory(&self, record: &IntakeRecord, draft: TriageResult) -> TriageResult {
        let Some(client) = &self.advisory else {
            return draft;
        };

        let snapshot = AdvisorySnapshot::from_record(record, draft.triage_level);
        match client.consult(&snapshot) {
            Ok(opinion) => {
                tracing::info!(
                    reference = %snapshot.reference,
                    advisory_level = opinion.triage_level.as_str(),
                    "Advisory opinion received"
                );
                merge_opinion(draft, opinion)
            }
            Err(err) => {
                tracing::warn!(
                    reference = %snapshot.reference,
                    error = %err,
                    "Advisory unavailable, returning rule-based result"
                );
                draft
            }
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Fold an opinion into the draft. The final level is the max of the
/// two; when that raises the draft, the stale default action is
/// replaced by the new level's. Opinion lines append after the
/// rule-based lines and duplicates collapse to the first occurrence.
fn merge_opinion(draft: TriageResult, opinion: AdvisoryOpinion) -> TriageResult {
    let triage_level = draft.triage_level.max(opinion.triage_level);

    let mut draft_actions = draft.actions;
    if triage_level != draft.triage_level {
        let stale = TriageMessages::default_action(draft.triage_level);
        draft_actions.retain(|action| action != stale);
    }

    let mut actions = vec![TriageMessages::default_action(triage_level).to_string()];
    actions.extend(draft_actions);
    actions.extend(opinion.actions);

    let mut rationale = draft.rationale;
    rationale.extend(opinion.rationale);

    let mut condition_hints = draft.condition_hints;
    condition_hints.extend(opinion.condition_hints);

    TriageResult {
        triage_level,
        rationale: dedup_keep_first(rationale),
        actions: dedup_keep_first(actions),
        condition_hints: dedup_keep_first(condition_hints),
    }
}
