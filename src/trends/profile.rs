//! Per-metric classification profiles.

use crate::models::TrendMetric;

/// Which way "better" points for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricDirection {
    LowerIsBetter,
    HigherIsBetter,
}

/// Dead band and direction used to turn a raw slope into a direction
/// label.
#[derive(Debug, Clone, Copy)]
pub struct MetricProfile {
    /// Slope magnitudes below this, in metric units per day, read as
    /// stable.
    pub dead_band: f64,
    pub direction: MetricDirection,
}

impl MetricProfile {
    /// Built-in profile for a tracked metric. All tracked metrics
    /// improve downward: pressures, glucose, and instrument totals
    /// obviously, and weight because the tracked cohorts are managing
    /// overweight-driven conditions.
    pub fn for_metric(metric: TrendMetric) -> Self {
        let dead_band = match metric {
            TrendMetric::BpSys | TrendMetric::BpDia => 1.0,
            TrendMetric::Glucose => 3.0,
            TrendMetric::Weight => 0.05,
            TrendMetric::Phq9 | TrendMetric::Gad7 => 0.2,
        };
        Self {
            dead_band,
            direction: MetricDirection::LowerIsBetter,
        }
    }
}
