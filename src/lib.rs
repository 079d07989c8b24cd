//! Acuita — deterministic clinical triage and trend estimation.
//!
//! Two independent pipelines:
//!
//! - **Triage**: raw intake (demographics, vitals, questionnaire scores,
//!   red-flag answers) → normalize → red-flag evaluation + domain rule
//!   engine (NCD or mental health) → aggregation → one ordered triage
//!   level with rationale, actions, and condition hints. Optionally
//!   enriched by an external advisory service that can add detail or
//!   raise urgency but never lower it, and whose failure is invisible
//!   to the caller.
//! - **Trends**: an ordered (timestamp, value) series for one metric →
//!   EWMA, least-squares slope per day, dead-band classification, and a
//!   confidence score that stays honest on sparse data.
//!
//! Everything except the advisory connector is pure and synchronous;
//! the hosting application owns persistence, transport, and logging
//! subscribers.

pub mod advisory;
pub mod models;
pub mod triage;
pub mod trends;

pub use advisory::{
    AdvisoryClient, AdvisoryError, AdvisoryOpinion, AdvisorySnapshot, HttpAdvisoryClient,
    MockAdvisoryClient,
};
pub use models::{
    BoundedValue, ClinicalDomain, Context, IntakeRecord, ObservationPoint, RawIntake, Sex,
    TrendMetric, TriageLevel,
};
pub use triage::{TriageEngine, TriageResult, ValidationError};
pub use trends::{
    estimate_trend, estimate_trend_with_profile, MetricDirection, MetricProfile, TrendDirection,
    TrendPoint, TrendResult,
};
