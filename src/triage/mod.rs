//! The triage pipeline: normalize → red flags + domain rule engine →
//! aggregate → optional external advisory merge.
//!
//! Every stage except the advisory call is a pure function; the
//! red-flag table and threshold bands are static declarative data so
//! evaluation order and rationale stay auditable row by row. Red flags
//! are an absolute floor: any triggered flag forces at least
//! `Emergency`, and nothing downstream can lower it.

pub mod aggregate;
pub mod context;
pub mod engine;
pub mod mental_health;
pub mod messages;
pub mod ncd;
pub mod normalize;
pub mod red_flags;
pub mod reference;
pub mod types;

pub use aggregate::aggregate;
pub use engine::TriageEngine;
pub use mental_health::evaluate_mental_health;
pub use messages::TriageMessages;
pub use ncd::evaluate_ncd;
pub use normalize::normalize_intake;
pub use red_flags::{evaluate_red_flags, RedFlagRule, RED_FLAG_RULES};
pub use types::{DomainAssessment, TriageResult};

use thiserror::Error;

/// Rejection of a malformed intake field. The only error the triage
/// path surfaces: scoring never starts on invalid input, and everything
/// after validation degrades instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("age must be between 0 and 120, got {0}")]
    AgeOutOfRange(i64),

    #[error("primary_symptom must not be empty")]
    MissingPrimarySymptom,

    #[error("duration_days must be non-negative, got {0}")]
    NegativeDuration(i64),

    #[error("{0} must be a finite number")]
    NonFiniteMeasurement(&'static str),
}

impl ValidationError {
    /// Name of the offending input field, for the caller's error payload.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::AgeOutOfRange(_) => "age",
            ValidationError::MissingPrimarySymptom => "primary_symptom",
            ValidationError::NegativeDuration(_) => "duration_days",
            ValidationError::NonFiniteMeasurement(field) => field,
        }
    }
}
