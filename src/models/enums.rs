use serde::{Deserialize, Serialize};

/// Patient sex as reported at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Other => "other",
        }
    }
}

/// Which rule engine applies to an intake record. Exactly one domain
/// applies per record; fields belonging to the other domain are dropped
/// during normalization, not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClinicalDomain {
    /// Non-communicable disease (hypertension, diabetes): vitals-driven.
    #[serde(rename = "ncd")]
    Ncd,
    /// Mental health: PHQ-9 / GAD-7 questionnaire-driven.
    #[serde(rename = "mh")]
    MentalHealth,
}

impl ClinicalDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            ClinicalDomain::Ncd => "ncd",
            ClinicalDomain::MentalHealth => "mh",
        }
    }
}

/// Ordered urgency classification. Declaration order is ascending
/// severity so the derived `Ord` makes `max` pick the more urgent level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    /// Continue self-care and monitoring at home.
    SelfCare,
    /// Routine primary care visit within 1-2 weeks.
    PrimaryCare,
    /// Clinical review within 24 hours.
    Urgent,
    /// Immediate emergency care.
    Emergency,
}

impl TriageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TriageLevel::SelfCare => "self_care",
            TriageLevel::PrimaryCare => "primary_care",
            TriageLevel::Urgent => "urgent",
            TriageLevel::Emergency => "emergency",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "self_care" => Some(TriageLevel::SelfCare),
            "primary_care" => Some(TriageLevel::PrimaryCare),
            "urgent" => Some(TriageLevel::Urgent),
            "emergency" => Some(TriageLevel::Emergency),
            _ => None,
        }
    }

    /// One step up the urgency ladder, saturating at `Emergency`.
    pub fn escalate(self) -> Self {
        match self {
            TriageLevel::SelfCare => TriageLevel::PrimaryCare,
            TriageLevel::PrimaryCare => TriageLevel::Urgent,
            TriageLevel::Urgent | TriageLevel::Emergency => TriageLevel::Emergency,
        }
    }
}
