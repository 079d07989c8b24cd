//! Observation trend estimation. Smooths a metric series with an
//! EWMA, fits a least-squares slope in units per day, classifies the
//! slope against a per-metric dead band, and reports how much the
//! estimate deserves to be trusted.

pub mod estimator;
pub mod profile;
pub mod types;

pub use estimator::{estimate_trend, estimate_trend_with_profile};
pub use profile::{MetricDirection, MetricProfile};
pub use types::{TrendDirection, TrendPoint, TrendResult};
