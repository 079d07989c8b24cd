use crate::models::TriageLevel;

// ---------------------------------------------------------------------------
// Action strings
// ---------------------------------------------------------------------------

// Default next step per final triage level.
pub const ACTION_EMERGENCY: &str = "seek emergency care immediately";
pub const ACTION_URGENT: &str = "arrange clinical review within 24 hours";
pub const ACTION_PRIMARY_CARE: &str = "book a primary care appointment within 1-2 weeks";
pub const ACTION_SELF_CARE: &str = "continue self-care and monitor at home";

// Rule-attached actions.
pub const ACTION_CRISIS_LINE: &str = "contact a crisis hotline or emergency services now";
pub const ACTION_STAY_WITH: &str = "do not leave the person alone";
pub const ACTION_RECHECK_BP: &str = "rest for 5 minutes and recheck blood pressure";
pub const ACTION_FAST_CARBS: &str = "take fast-acting carbohydrate and recheck glucose in 15 minutes";
pub const ACTION_REVIEW_MEDS: &str = "review the medication list with a clinician urgently";

// ---------------------------------------------------------------------------
// TriageMessages
// ---------------------------------------------------------------------------

/// Rationale template builder. Red-flag rows and domain band rows that
/// describe the same finding deliberately produce the same string, so
/// the aggregator's keep-first dedup collapses them into one entry.
pub struct TriageMessages;

impl TriageMessages {
    /// Default next step for a final triage level.
    pub fn default_action(level: TriageLevel) -> &'static str {
        match level {
            TriageLevel::Emergency => ACTION_EMERGENCY,
            TriageLevel::Urgent => ACTION_URGENT,
            TriageLevel::PrimaryCare => ACTION_PRIMARY_CARE,
            TriageLevel::SelfCare => ACTION_SELF_CARE,
        }
    }

    // ── Red flags ──────────────────────────────────────────────────

    pub fn self_harm() -> String {
        "Self-harm risk was reported in the screening answers; immediate safety support is needed."
            .to_string()
    }

    pub fn hypertensive_crisis(sys: Option<f64>, dia: Option<f64>) -> String {
        format!(
            "Blood pressure {} is in the hypertensive crisis range.",
            format_bp(sys, dia)
        )
    }

    pub fn severe_hyperglycemia(glucose: f64) -> String {
        format!("Blood glucose {:.0} mg/dL is critically high.", glucose)
    }

    pub fn severe_hypoglycemia(glucose: f64) -> String {
        format!("Blood glucose {:.0} mg/dL is critically low.", glucose)
    }

    // ── NCD bands ──────────────────────────────────────────────────

    pub fn bp_stage2(sys: Option<f64>, dia: Option<f64>) -> String {
        format!(
            "Blood pressure {} is in the stage 2 hypertension range.",
            format_bp(sys, dia)
        )
    }

    pub fn bp_stage1(sys: Option<f64>, dia: Option<f64>) -> String {
        format!(
            "Blood pressure {} is in the stage 1 hypertension range.",
            format_bp(sys, dia)
        )
    }

    pub fn bp_elevated(sys: f64) -> String {
        format!(
            "Systolic pressure {:.0} mmHg is elevated; keep monitoring at home.",
            sys
        )
    }

    pub fn glucose_very_high(glucose: f64) -> String {
        format!("Blood glucose {:.0} mg/dL is severely elevated.", glucose)
    }

    pub fn glucose_high(glucose: f64) -> String {
        format!(
            "Blood glucose {:.0} mg/dL is above the diabetic control target.",
            glucose
        )
    }

    pub fn glucose_elevated(glucose: f64) -> String {
        format!(
            "Blood glucose {:.0} mg/dL is mildly elevated; keep monitoring at home.",
            glucose
        )
    }

    pub fn missing_ncd_vitals() -> String {
        "No blood pressure or glucose measurements were provided; scoring is based on reported symptoms only."
            .to_string()
    }

    // ── Mental-health bands ────────────────────────────────────────

    pub fn phq9_severe(score: u8) -> String {
        format!("PHQ-9 score {} indicates severe depressive symptoms.", score)
    }

    pub fn phq9_moderately_severe(score: u8) -> String {
        format!(
            "PHQ-9 score {} indicates moderately severe depressive symptoms.",
            score
        )
    }

    pub fn phq9_moderate(score: u8) -> String {
        format!(
            "PHQ-9 score {} indicates moderate depressive symptoms.",
            score
        )
    }

    pub fn phq9_mild(score: u8) -> String {
        format!("PHQ-9 score {} indicates mild depressive symptoms.", score)
    }

    pub fn gad7_severe(score: u8) -> String {
        format!("GAD-7 score {} indicates severe anxiety symptoms.", score)
    }

    pub fn gad7_moderate(score: u8) -> String {
        format!("GAD-7 score {} indicates moderate anxiety symptoms.", score)
    }

    pub fn gad7_mild(score: u8) -> String {
        format!("GAD-7 score {} indicates mild anxiety symptoms.", score)
    }

    pub fn symptom_persistence(days: u32) -> String {
        format!(
            "Symptoms have persisted for {} days, meeting the two-week duration criterion.",
            days
        )
    }

    pub fn missing_mh_scores() -> String {
        "No PHQ-9 or GAD-7 scores were provided; scoring is based on reported symptoms only."
            .to_string()
    }

    // ── Context enrichment ─────────────────────────────────────────

    pub fn high_risk_comorbidity(code: &str) -> String {
        format!("Known {} raises the urgency of this presentation.", code)
    }

    pub fn moderate_comorbidity(code: &str) -> String {
        format!("History of {} is relevant to this presentation.", code)
    }

    pub fn allergy_conflict(allergen: &str, medication: &str) -> String {
        format!(
            "Current medication {} conflicts with a documented {} allergy.",
            medication, allergen
        )
    }

    // ── Data quality ───────────────────────────────────────────────

    pub fn clamped_value(field: &str, given: f64, low: f64, high: f64) -> String {
        format!(
            "Data quality: reported {} {:.0} is outside the plausible range {:.0}-{:.0} and was clamped for scoring.",
            field, given, low, high
        )
    }
}

/// "182/121 mmHg" when both readings exist, otherwise name the one that does.
fn format_bp(sys: Option<f64>, dia: Option<f64>) -> String {
    match (sys, dia) {
        (Some(s), Some(d)) => format!("{:.0}/{:.0} mmHg", s, d),
        (Some(s), None) => format!("{:.0} mmHg systolic", s),
        (None, Some(d)) => format!("{:.0} mmHg diastolic", d),
        (None, None) => "reading".to_string(),
    }
}
