use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored measurement in a longitudinal series. The persistence
/// layer resolves an (episode, metric) pair into an ordered slice of
/// these; timestamps must be non-decreasing as provided, the trend
/// estimator does not sort.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationPoint {
    pub recorded_at: DateTime<Utc>,
    pub value: f64,
}

impl ObservationPoint {
    pub fn new(recorded_at: DateTime<Utc>, value: f64) -> Self {
        Self { recorded_at, value }
    }
}

/// Metrics the trend pipeline understands. Closed set: each carries its
/// own dead-band and direction profile (see `trends::MetricProfile`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    BpSys,
    BpDia,
    Glucose,
    Weight,
    Phq9,
    Gad7,
}

impl TrendMetric {
    pub fn as_str(self) -> &'static str {
        match self {
            TrendMetric::BpSys => "bp_sys",
            TrendMetric::BpDia => "bp_dia",
            TrendMetric::Glucose => "glucose",
            TrendMetric::Weight => "weight",
            TrendMetric::Phq9 => "phq9",
            TrendMetric::Gad7 => "gad7",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bp_sys" => Some(TrendMetric::BpSys),
            "bp_dia" => Some(TrendMetric::BpDia),
            "glucose" => Some(TrendMetric::Glucose),
            "weight" => Some(TrendMetric::Weight),
            "phq9" => Some(TrendMetric::Phq9),
            "gad7" => Some(TrendMetric::Gad7),
            _ => None,
        }
    }
}
