//! Red-flag screening. A fired flag is an absolute floor: the final
//! triage level is Emergency no matter what the domain scoring says.
//! Rules are evaluated in declaration order and every matching rule
//! fires, so rationale order is stable across runs.

use crate::models::IntakeRecord;

use super::messages::{
    TriageMessages, ACTION_CRISIS_LINE, ACTION_FAST_CARBS, ACTION_RECHECK_BP, ACTION_STAY_WITH,
};
use super::reference::{
    BP_CRISIS_DIA, BP_CRISIS_SYS, GLUCOSE_CRITICAL_HIGH, GLUCOSE_CRITICAL_LOW,
    HINT_DKA_HHS, HINT_HYPERTENSIVE_CRISIS, HINT_HYPOGLYCEMIA,
};

/// One screening rule. Predicates read the normalized record only;
/// messages may interpolate the triggering measurements.
pub struct RedFlagRule {
    pub id: &'static str,
    pub predicate: fn(&IntakeRecord) -> bool,
    pub message: fn(&IntakeRecord) -> String,
    pub hints: &'static [&'static str],
    pub actions: &'static [&'static str],
}

/// The screening table, most safety-critical first. Order is part of
/// the contract: rationale lines follow it.
pub const RED_FLAG_RULES: &[RedFlagRule] = &[
    RedFlagRule {
        id: "self_harm",
        predicate: answered_self_harm,
        message: self_harm_message,
        hints: &[],
        actions: &[ACTION_CRISIS_LINE, ACTION_STAY_WITH],
    },
    RedFlagRule {
        id: "hypertensive_crisis",
        predicate: bp_in_crisis,
        message: hypertensive_crisis_message,
        hints: &[HINT_HYPERTENSIVE_CRISIS],
        actions: &[ACTION_RECHECK_BP],
    },
    RedFlagRule {
        id: "severe_hyperglycemia",
        predicate: glucose_critical_high,
        message: severe_hyperglycemia_message,
        hints: &[HINT_DKA_HHS],
        actions: &[],
    },
    RedFlagRule {
        id: "severe_hypoglycemia",
        predicate: glucose_critical_low,
        message: severe_hypoglycemia_message,
        hints: &[HINT_HYPOGLYCEMIA],
        actions: &[ACTION_FAST_CARBS],
    },
];

/// Return every rule that fires for this record, in table order.
pub fn evaluate_red_flags(record: &IntakeRecord) -> Vec<&'static RedFlagRule> {
    RED_FLAG_RULES
        .iter()
        .filter(|rule| (rule.predicate)(record))
        .collect()
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn answered_self_harm(record: &IntakeRecord) -> bool {
    record.red_flag("self_harm")
}

fn bp_in_crisis(record: &IntakeRecord) -> bool {
    record.systolic().is_some_and(|sys| sys >= BP_CRISIS_SYS)
        || record.diastolic().is_some_and(|dia| dia >= BP_CRISIS_DIA)
}

fn glucose_critical_high(record: &IntakeRecord) -> bool {
    record
        .glucose_level()
        .is_some_and(|g| g >= GLUCOSE_CRITICAL_HIGH)
}

fn glucose_critical_low(record: &IntakeRecord) -> bool {
    record
        .glucose_level()
        .is_some_and(|g| g <= GLUCOSE_CRITICAL_LOW)
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

fn self_harm_message(_record: &IntakeRecord) -> String {
    TriageMessages::self_harm()
}

fn hypertensive_crisis_message(record: &IntakeRecord) -> String {
    TriageMessages::hypertensive_crisis(record.systolic(), record.diastolic())
}

fn severe_hyperglycemia_message(record: &IntakeRecord) -> String {
    TriageMessages::severe_hyperglycemia(record.glucose_level().unwrap_or(0.0))
}

fn severe_hypoglycemia_message(record: &IntakeRecord) -> String {
    TriageMessages::severe_hypoglycemia(record.glucose_level().unwrap_or(0.0))
}
