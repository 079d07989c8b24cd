//! Trend estimation over an observation series: EWMA smoothing for
//! the current level, an ordinary least-squares slope in units per
//! day for the direction, and a confidence that scales with sample
//! count and fit quality.

use crate::models::{ObservationPoint, TrendMetric};

use super::profile::{MetricDirection, MetricProfile};
use super::types::{TrendDirection, TrendPoint, TrendResult};

/// EWMA weight of the newest observation.
const SMOOTHING_FACTOR: f64 = 0.3;
/// Series length at which the sample-count confidence term saturates.
const REFERENCE_POINT_COUNT: f64 = 5.0;
/// Most recent observations echoed back in the result.
const POINTS_ECHO_LIMIT: usize = 180;

const SECONDS_PER_DAY: f64 = 86_400.0;
/// Time spread (in squared days) below which regression is degenerate.
const MIN_TIME_SPREAD: f64 = 1e-9;

/// Estimate the trend of `series` using the built-in profile for
/// `metric`. The series must be ordered by recorded time, oldest
/// first, as the persistence layer provides it.
pub fn estimate_trend(metric: TrendMetric, series: &[ObservationPoint]) -> TrendResult {
    estimate_trend_with_profile(&MetricProfile::for_metric(metric), series)
}

/// Estimate with an explicit profile. A series shorter than two
/// points, or one without any time spread, yields `Insufficient` with
/// confidence exactly zero.
pub fn estimate_trend_with_profile(
    profile: &MetricProfile,
    series: &[ObservationPoint],
) -> TrendResult {
    let points = echo_points(series);

    if series.len() < 2 {
        return TrendResult {
            points,
            ewma: series.first().map(|p| p.value),
            slope_per_day: None,
            trend: TrendDirection::Insufficient,
            confidence: 0.0,
        };
    }

    let ewma = smooth(series);

    let Some((slope, normalized_residual)) = regress(series) else {
        return TrendResult {
            points,
            ewma: Some(ewma),
            slope_per_day: None,
            trend: TrendDirection::Insufficient,
            confidence: 0.0,
        };
    };

    TrendResult {
        points,
        ewma: Some(ewma),
        slope_per_day: Some(slope),
        trend: classify(slope, profile),
        confidence: confidence(series.len(), normalized_residual),
    }
}

/// EWMA seeded at the oldest value so the first observation carries
/// full weight until newer ones arrive.
fn smooth(series: &[ObservationPoint]) -> f64 {
    let mut ewma = series[0].value;
    for point in &series[1..] {
        ewma = SMOOTHING_FACTOR * point.value + (1.0 - SMOOTHING_FACTOR) * ewma;
    }
    ewma
}

/// Least-squares slope in units per day plus the residual sum of
/// squares normalized by total variance. `None` when every point
/// shares one timestamp.
fn regress(series: &[ObservationPoint]) -> Option<(f64, f64)> {
    let n = series.len() as f64;
    let t0 = series[0].recorded_at;
    let xs: Vec<f64> = series
        .iter()
        .map(|p| (p.recorded_at - t0).num_seconds() as f64 / SECONDS_PER_DAY)
        .collect();

    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = series.iter().map(|p| p.value).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (x, point) in xs.iter().zip(series) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (point.value - mean_y);
    }

    if sxx < MIN_TIME_SPREAD {
        return None;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (x, point) in xs.iter().zip(series) {
        let fitted = intercept + slope * x;
        ss_res += (point.value - fitted).powi(2);
        ss_tot += (point.value - mean_y).powi(2);
    }

    // A perfectly flat series fits its own mean exactly.
    let normalized_residual = if ss_tot > 0.0 { ss_res / ss_tot } else { 0.0 };

    Some((slope, normalized_residual))
}

fn classify(slope: f64, profile: &MetricProfile) -> TrendDirection {
    if slope.abs() < profile.dead_band {
        return TrendDirection::Stable;
    }
    let falling = slope < 0.0;
    match profile.direction {
        MetricDirection::LowerIsBetter if falling => TrendDirection::Improving,
        MetricDirection::LowerIsBetter => TrendDirection::Worsening,
        MetricDirection::HigherIsBetter if falling => TrendDirection::Worsening,
        MetricDirection::HigherIsBetter => TrendDirection::Improving,
    }
}

fn confidence(count: usize, normalized_residual: f64) -> f64 {
    let sample_term = count as f64 / REFERENCE_POINT_COUNT;
    let fit_term = 1.0 / (1.0 + normalized_residual);
    (sample_term * fit_term).min(1.0)
}

fn echo_points(series: &[ObservationPoint]) -> Vec<TrendPoint> {
    let start = series.len().saturating_sub(POINTS_ECHO_LIMIT);
    series[start..]
        .iter()
        .map(|p| TrendPoint {
            date: p.recorded_at,
            value: p.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, TimeZone, Utc};

    use super::*;

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap() + Duration::days(offset)
    }

    fn series(values: &[(i64, f64)]) -> Vec<ObservationPoint> {
        values
            .iter()
            .map(|&(offset, value)| ObservationPoint::new(day(offset), value))
            .collect()
    }

    #[test]
    fn empty_series_is_insufficient() {
        let result = estimate_trend(TrendMetric::BpSys, &[]);
        assert_eq!(result.trend, TrendDirection::Insufficient);
        assert_eq!(result.confidence, 0.0);
        assert!(result.ewma.is_none());
        assert!(result.slope_per_day.is_none());
        assert!(result.points.is_empty());
    }

    #[test]
    fn single_point_is_insufficient_but_keeps_its_value() {
        let result = estimate_trend(TrendMetric::BpSys, &series(&[(0, 142.0)]));
        assert_eq!(result.trend, TrendDirection::Insufficient);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.ewma, Some(142.0));
        assert!(result.slope_per_day.is_none());
        assert_eq!(result.points.len(), 1);
    }

    #[test]
    fn same_timestamp_series_is_insufficient() {
        let points = vec![
            ObservationPoint::new(day(0), 140.0),
            ObservationPoint::new(day(0), 150.0),
        ];
        let result = estimate_trend(TrendMetric::BpSys, &points);
        assert_eq!(result.trend, TrendDirection::Insufficient);
        assert_eq!(result.confidence, 0.0);
        assert!(result.slope_per_day.is_none());
        assert!(result.ewma.is_some());
    }

    #[test]
    fn constant_series_is_stable_with_count_scaled_confidence() {
        let two = estimate_trend(TrendMetric::Glucose, &series(&[(0, 100.0), (1, 100.0)]));
        assert_eq!(two.trend, TrendDirection::Stable);
        assert_eq!(two.slope_per_day, Some(0.0));
        assert!((two.confidence - 0.4).abs() < 1e-12);

        let three = estimate_trend(
            TrendMetric::Glucose,
            &series(&[(0, 100.0), (1, 100.0), (2, 100.0)]),
        );
        assert!((three.confidence - 0.6).abs() < 1e-12);

        let ten: Vec<(i64, f64)> = (0..10).map(|d| (d, 100.0)).collect();
        let capped = estimate_trend(TrendMetric::Glucose, &series(&ten));
        assert_eq!(capped.confidence, 1.0);
    }

    #[test]
    fn falling_bp_series_is_improving() {
        let result = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 138.0), (2, 135.0), (3, 130.0)]),
        );
        assert_eq!(result.trend, TrendDirection::Improving);
        let slope = result.slope_per_day.unwrap();
        assert!((slope + 3.3).abs() < 1e-9);
        assert!(result.confidence > 0.75 && result.confidence < 0.78);
    }

    #[test]
    fn rising_glucose_series_is_worsening() {
        let result = estimate_trend(
            TrendMetric::Glucose,
            &series(&[(0, 100.0), (1, 105.0), (2, 110.0), (3, 115.0)]),
        );
        assert_eq!(result.trend, TrendDirection::Worsening);
        assert!((result.slope_per_day.unwrap() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn slope_inside_dead_band_is_stable() {
        // 2 units/day is under the 3.0 glucose dead band.
        let result = estimate_trend(
            TrendMetric::Glucose,
            &series(&[(0, 100.0), (1, 102.0), (2, 104.0)]),
        );
        assert_eq!(result.trend, TrendDirection::Stable);
    }

    #[test]
    fn higher_is_better_profile_flips_the_labels() {
        let profile = MetricProfile {
            dead_band: 0.5,
            direction: MetricDirection::HigherIsBetter,
        };
        let rising = series(&[(0, 10.0), (1, 12.0), (2, 14.0)]);
        assert_eq!(
            estimate_trend_with_profile(&profile, &rising).trend,
            TrendDirection::Improving
        );
        let falling = series(&[(0, 14.0), (1, 12.0), (2, 10.0)]);
        assert_eq!(
            estimate_trend_with_profile(&profile, &falling).trend,
            TrendDirection::Worsening
        );
    }

    #[test]
    fn ewma_weights_recent_values() {
        let result = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 138.0), (2, 135.0), (3, 130.0)]),
        );
        // 140 → 139.4 → 138.08 → 135.656 with alpha 0.3.
        assert!((result.ewma.unwrap() - 135.656).abs() < 1e-9);
    }

    #[test]
    fn noisier_fit_lowers_confidence() {
        let clean = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 135.0), (2, 130.0), (3, 125.0)]),
        );
        let noisy = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 128.0), (2, 137.0), (3, 122.0)]),
        );
        assert!(clean.confidence > noisy.confidence);
    }

    #[test]
    fn more_points_raise_confidence_on_an_exact_fit() {
        let three = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 136.0), (2, 132.0)]),
        );
        let five = estimate_trend(
            TrendMetric::BpSys,
            &series(&[(0, 140.0), (1, 136.0), (2, 132.0), (3, 128.0), (4, 124.0)]),
        );
        assert!((three.confidence - 0.6).abs() < 1e-9);
        assert!((five.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn echo_keeps_only_the_most_recent_points() {
        let long: Vec<(i64, f64)> = (0..200).map(|d| (d, 100.0 + d as f64 * 0.01)).collect();
        let result = estimate_trend(TrendMetric::Weight, &series(&long));
        assert_eq!(result.points.len(), 180);
        assert_eq!(result.points[0].date, day(20));
        assert_eq!(result.points.last().unwrap().date, day(199));
    }

    #[test]
    fn result_serializes_for_the_wire() {
        let result = estimate_trend(
            TrendMetric::Phq9,
            &series(&[(0, 18.0), (7, 14.0), (14, 11.0)]),
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["trend"], "improving");
        assert!(json["confidence"].as_f64().unwrap() > 0.0);
        assert!(json["slope_per_day"].as_f64().unwrap() < 0.0);
    }
}
