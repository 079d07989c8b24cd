//! Shared value objects: intake payloads, canonical records, and the
//! enums both pipelines speak. Everything here is transient, built for
//! one request and dropped with it.

pub mod enums;
pub mod intake;
pub mod observation;

pub use enums::{ClinicalDomain, Sex, TriageLevel};
pub use intake::{BoundedValue, Context, IntakeRecord, RawIntake};
pub use observation::{ObservationPoint, TrendMetric};
