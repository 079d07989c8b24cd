//! Result types for observation trend estimation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a series once smoothed and classified against the
/// metric's dead band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
    /// Fewer than two points, or a degenerate time span.
    Insufficient,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Improving => "improving",
            TrendDirection::Stable => "stable",
            TrendDirection::Worsening => "worsening",
            TrendDirection::Insufficient => "insufficient",
        }
    }
}

/// One echoed observation, ready for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Trend estimate for one metric series. `ewma` and `slope_per_day`
/// are `None` exactly when the series could not support them, so a
/// consumer can distinguish "flat" from "unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendResult {
    pub points: Vec<TrendPoint>,
    pub ewma: Option<f64>,
    pub slope_per_day: Option<f64>,
    pub trend: TrendDirection,
    pub confidence: f64,
}
