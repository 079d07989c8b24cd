//! Static clinical reference data: graded threshold bands, plausibility
//! ranges, and the context lookup tables. Bands are ordered most severe
//! first and scanned first-match, so each row stays independently
//! auditable.

use crate::models::TriageLevel;

use super::messages::TriageMessages;

// ═══════════════════════════════════════════════════════════
// Thresholds
// ═══════════════════════════════════════════════════════════

/// Hypertensive crisis thresholds (mmHg). Also a red flag.
pub const BP_CRISIS_SYS: f64 = 180.0;
pub const BP_CRISIS_DIA: f64 = 120.0;

/// Stage 2 hypertension thresholds (mmHg).
pub const BP_STAGE2_SYS: f64 = 160.0;
pub const BP_STAGE2_DIA: f64 = 100.0;

/// Stage 1 hypertension thresholds (mmHg).
pub const BP_STAGE1_SYS: f64 = 140.0;
pub const BP_STAGE1_DIA: f64 = 90.0;

/// Elevated systolic pressure below stage 1 (mmHg); note only.
pub const BP_ELEVATED_SYS: f64 = 120.0;

/// Critical glucose bounds (mg/dL). Both are red flags.
pub const GLUCOSE_CRITICAL_HIGH: f64 = 400.0;
pub const GLUCOSE_CRITICAL_LOW: f64 = 60.0;

/// Graded hyperglycemia thresholds (mg/dL).
pub const GLUCOSE_VERY_HIGH: f64 = 300.0;
pub const GLUCOSE_HIGH: f64 = 180.0;
pub const GLUCOSE_ELEVATED: f64 = 140.0;

/// PHQ-9 severity cut-offs.
pub const PHQ9_SEVERE: u8 = 20;
pub const PHQ9_MODERATELY_SEVERE: u8 = 15;
pub const PHQ9_MODERATE: u8 = 10;
pub const PHQ9_MILD: u8 = 5;

/// GAD-7 severity cut-offs.
pub const GAD7_SEVERE: u8 = 15;
pub const GAD7_MODERATE: u8 = 10;
pub const GAD7_MILD: u8 = 5;

/// Score at which a condition hint is attached.
pub const PHQ9_HINT_MIN: u8 = 10;
pub const GAD7_HINT_MIN: u8 = 10;

/// Symptom duration meeting the episode time criterion (days).
pub const MH_PERSISTENCE_DAYS: u32 = 14;

// ═══════════════════════════════════════════════════════════
// Plausibility ranges (normalizer clamps outside these)
// ═══════════════════════════════════════════════════════════

pub const MAX_AGE: i64 = 120;
pub const PLAUSIBLE_BP_SYS: (f64, f64) = (40.0, 300.0);
pub const PLAUSIBLE_BP_DIA: (f64, f64) = (20.0, 200.0);
pub const PLAUSIBLE_GLUCOSE: (f64, f64) = (20.0, 800.0);
pub const PLAUSIBLE_WEIGHT: (f64, f64) = (1.0, 500.0);
pub const PHQ9_MAX: u8 = 27;
pub const GAD7_MAX: u8 = 21;

// ═══════════════════════════════════════════════════════════
// Condition hints
// ═══════════════════════════════════════════════════════════

pub const HINT_HYPERTENSIVE_CRISIS: &str = "hypertensive crisis";
pub const HINT_UNCONTROLLED_HTN: &str = "uncontrolled hypertension";
pub const HINT_DKA_HHS: &str = "possible DKA/HHS risk";
pub const HINT_UNCONTROLLED_DM: &str = "uncontrolled diabetes";
pub const HINT_HYPOGLYCEMIA: &str = "hypoglycemia";
pub const HINT_DEPRESSIVE_EPISODE: &str = "possible depressive episode";
pub const HINT_ANXIETY_DISORDER: &str = "possible anxiety disorder";
pub const HINT_HYPOGLYCEMIA_RISK: &str = "hypoglycemia risk";

// ═══════════════════════════════════════════════════════════
// Graded bands
// ═══════════════════════════════════════════════════════════

/// One blood-pressure band: fires when systolic OR diastolic reaches its
/// minimum.
pub struct BpBand {
    pub min_sys: f64,
    pub min_dia: f64,
    pub severity: TriageLevel,
    pub hint: Option<&'static str>,
    pub message: fn(Option<f64>, Option<f64>) -> String,
}

/// Blood-pressure bands, most severe first; first match wins.
pub const BP_BANDS: &[BpBand] = &[
    BpBand {
        min_sys: BP_CRISIS_SYS,
        min_dia: BP_CRISIS_DIA,
        severity: TriageLevel::Emergency,
        hint: Some(HINT_HYPERTENSIVE_CRISIS),
        message: TriageMessages::hypertensive_crisis,
    },
    BpBand {
        min_sys: BP_STAGE2_SYS,
        min_dia: BP_STAGE2_DIA,
        severity: TriageLevel::Urgent,
        hint: None,
        message: TriageMessages::bp_stage2,
    },
    BpBand {
        min_sys: BP_STAGE1_SYS,
        min_dia: BP_STAGE1_DIA,
        severity: TriageLevel::PrimaryCare,
        hint: Some(HINT_UNCONTROLLED_HTN),
        message: TriageMessages::bp_stage1,
    },
];

/// One hyperglycemia band: fires when glucose reaches its minimum.
pub struct GlucoseBand {
    pub min: f64,
    pub severity: TriageLevel,
    pub hint: Option<&'static str>,
    pub message: fn(f64) -> String,
}

/// Hyperglycemia bands, most severe first; first match wins. The
/// critical-low bound is handled separately (it is a floor, not a band).
pub const GLUCOSE_BANDS: &[GlucoseBand] = &[
    GlucoseBand {
        min: GLUCOSE_CRITICAL_HIGH,
        severity: TriageLevel::Emergency,
        hint: Some(HINT_DKA_HHS),
        message: TriageMessages::severe_hyperglycemia,
    },
    GlucoseBand {
        min: GLUCOSE_VERY_HIGH,
        severity: TriageLevel::Urgent,
        hint: Some(HINT_DKA_HHS),
        message: TriageMessages::glucose_very_high,
    },
    GlucoseBand {
        min: GLUCOSE_HIGH,
        severity: TriageLevel::PrimaryCare,
        hint: Some(HINT_UNCONTROLLED_DM),
        message: TriageMessages::glucose_high,
    },
    GlucoseBand {
        min: GLUCOSE_ELEVATED,
        severity: TriageLevel::SelfCare,
        hint: None,
        message: TriageMessages::glucose_elevated,
    },
];

/// One questionnaire band: fires when the score reaches its minimum.
pub struct ScoreBand {
    pub min: u8,
    pub severity: TriageLevel,
    pub message: fn(u8) -> String,
}

/// PHQ-9 bands, most severe first; first match wins.
pub const PHQ9_BANDS: &[ScoreBand] = &[
    ScoreBand {
        min: PHQ9_SEVERE,
        severity: TriageLevel::Urgent,
        message: TriageMessages::phq9_severe,
    },
    ScoreBand {
        min: PHQ9_MODERATELY_SEVERE,
        severity: TriageLevel::PrimaryCare,
        message: TriageMessages::phq9_moderately_severe,
    },
    ScoreBand {
        min: PHQ9_MODERATE,
        severity: TriageLevel::PrimaryCare,
        message: TriageMessages::phq9_moderate,
    },
    ScoreBand {
        min: PHQ9_MILD,
        severity: TriageLevel::SelfCare,
        message: TriageMessages::phq9_mild,
    },
];

/// GAD-7 bands, most severe first; first match wins.
pub const GAD7_BANDS: &[ScoreBand] = &[
    ScoreBand {
        min: GAD7_SEVERE,
        severity: TriageLevel::Urgent,
        message: TriageMessages::gad7_severe,
    },
    ScoreBand {
        min: GAD7_MODERATE,
        severity: TriageLevel::PrimaryCare,
        message: TriageMessages::gad7_moderate,
    },
    ScoreBand {
        min: GAD7_MILD,
        severity: TriageLevel::SelfCare,
        message: TriageMessages::gad7_mild,
    },
];

// ═══════════════════════════════════════════════════════════
// Context lookup tables
// ═══════════════════════════════════════════════════════════

/// Comorbidities that escalate severity by one level.
pub const HIGH_RISK_COMORBIDITIES: &[&str] = &["ckd", "cancer", "copd"];

/// Comorbidities noted in the rationale without escalation.
pub const MODERATE_COMORBIDITIES: &[&str] = &["htn", "dm", "asthma"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComorbidityRisk {
    Moderate,
    High,
}

/// Risk tier for a comorbidity code; `None` for unrecognized codes.
pub fn comorbidity_risk(code: &str) -> Option<ComorbidityRisk> {
    let code = code.trim();
    if HIGH_RISK_COMORBIDITIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(code))
    {
        Some(ComorbidityRisk::High)
    } else if MODERATE_COMORBIDITIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(code))
    {
        Some(ComorbidityRisk::Moderate)
    } else {
        None
    }
}

/// Monitoring note attached to a current medication.
pub struct MedicationNote {
    pub name: &'static str,
    pub note: &'static str,
    pub hint: Option<&'static str>,
}

pub const MEDICATION_NOTES: &[MedicationNote] = &[
    MedicationNote {
        name: "metformin",
        note: "Metformin requires periodic renal function review.",
        hint: None,
    },
    MedicationNote {
        name: "insulin",
        note: "Insulin use carries hypoglycemia risk; keep fast-acting carbohydrate available.",
        hint: Some(HINT_HYPOGLYCEMIA_RISK),
    },
];

/// Monitoring note for a medication name, matched case-insensitively.
pub fn medication_note(name: &str) -> Option<&'static MedicationNote> {
    let name = name.trim();
    MEDICATION_NOTES
        .iter()
        .find(|m| m.name.eq_ignore_ascii_case(name))
}

/// A documented allergen and the medications it conflicts with.
pub struct AllergyFamily {
    pub allergen: &'static str,
    pub members: &'static [&'static str],
}

pub const ALLERGY_FAMILIES: &[AllergyFamily] = &[
    AllergyFamily {
        allergen: "penicillin",
        members: &["amoxicillin", "ampicillin"],
    },
    AllergyFamily {
        allergen: "nsaid",
        members: &["ibuprofen", "naproxen", "aspirin"],
    },
];

/// Whether a current medication conflicts with a documented allergy.
/// A direct name match always conflicts; otherwise the family table
/// decides. Matching is case-insensitive on trimmed tokens.
pub fn is_allergy_conflict(allergen: &str, medication: &str) -> bool {
    let allergen = allergen.trim();
    let medication = medication.trim();
    if allergen.eq_ignore_ascii_case(medication) {
        return true;
    }
    ALLERGY_FAMILIES.iter().any(|family| {
        family.allergen.eq_ignore_ascii_case(allergen)
            && family
                .members
                .iter()
                .any(|m| m.eq_ignore_ascii_case(medication))
    })
}
