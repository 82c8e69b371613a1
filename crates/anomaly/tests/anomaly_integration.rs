//! Integration tests for anomaly

use anomaly::robust::{modified_z_scores, scores_with_baseline};
use anomaly::spacing::enforce_min_spacing;
use anomaly::{
    Baseline, DetectorKind, Direction, ExtremeWindowDetector, PersistentRunDetector, PriceSeries,
    SeriesDetector, SingleDayDetector, TrendDetector,
};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Weekday-only dates starting Monday 2024-01-01.
fn business_days(n: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n);
    let mut day = start();
    while dates.len() < n {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            dates.push(day);
        }
        day += Duration::days(1);
    }
    dates
}

/// Closes compounding `0.01 * sin(1.7 i)` with `(index, return)` shocks.
fn closes_with_shocks(len: usize, shocks: &[(usize, f64)]) -> Vec<f64> {
    let mut price = 100.0;
    (0..len)
        .map(|i| {
            if i > 0 {
                let r = shocks
                    .iter()
                    .find(|(at, _)| *at == i)
                    .map(|(_, r)| *r)
                    .unwrap_or_else(|| 0.01 * (1.7 * i as f64).sin());
                price *= 1.0 + r;
            }
            price
        })
        .collect()
}

fn trading_series(len: usize, shocks: &[(usize, f64)]) -> PriceSeries {
    let closes = closes_with_shocks(len, shocks);
    PriceSeries::from_pairs(business_days(len).into_iter().zip(closes)).unwrap()
}

fn calendar_series(len: usize, shocks: &[(usize, f64)]) -> PriceSeries {
    PriceSeries::daily(start(), &closes_with_shocks(len, shocks)).unwrap()
}

// ============================================================================
// Robust scoring
// ============================================================================

#[test]
fn test_constant_input_scores_zero() {
    let scores = modified_z_scores(&[4.2; 12]);
    assert_eq!(scores.len(), 12);
    assert!(scores.iter().all(|&s| s == 0.0));
}

#[test]
fn test_scale_invariance() {
    let values = [0.3, -1.2, 0.8, 5.0, 0.1, -0.4, 2.2];
    let scaled: Vec<f64> = values.iter().map(|v| v * 37.5).collect();
    for (a, b) in modified_z_scores(&values)
        .iter()
        .zip(modified_z_scores(&scaled))
    {
        assert!((a - b).abs() < 1e-9);
    }
}

#[test]
fn test_order_equivariance() {
    let values = [0.3, -1.2, 0.8, 5.0, 0.1, -0.4, 2.2];
    let permutation = [4, 0, 6, 2, 5, 1, 3];
    let shuffled: Vec<f64> = permutation.iter().map(|&i| values[i]).collect();

    let original = modified_z_scores(&values);
    let permuted = modified_z_scores(&shuffled);
    for (pos, &i) in permutation.iter().enumerate() {
        assert!((permuted[pos] - original[i]).abs() < 1e-12);
    }
}

#[test]
fn test_whole_series_baseline_matches_plain_scores() {
    let values = [1.0, 2.0, 3.0, 4.0, 9.0];
    assert_eq!(
        scores_with_baseline(&values, Baseline::WholeSeries),
        modified_z_scores(&values)
    );
}

#[test]
fn test_trailing_baseline_ignores_future_values() {
    let values = [1.0, 2.0, 1.5, 2.5, 1.0, 2.0, 100.0];
    let full = scores_with_baseline(&values, Baseline::Trailing(4));
    let truncated = scores_with_baseline(&values[..6], Baseline::Trailing(4));
    assert_eq!(&full[..6], truncated.as_slice());
}

#[test]
fn test_spacing_keeps_earlier_of_close_dates() {
    let dates = [start(), start() + Duration::days(2), start() + Duration::days(5)];
    assert_eq!(enforce_min_spacing(&dates, 3), vec![0, 2]);
    assert_eq!(enforce_min_spacing(&dates, 2), vec![0, 1, 2]);
}

// ============================================================================
// Detectors
// ============================================================================

#[test]
fn test_single_day_outlier_on_correct_date() {
    let series = calendar_series(120, &[(40, 0.18)]);
    let detector = SingleDayDetector::new(3.5).unwrap();
    assert_eq!(detector.kind(), DetectorKind::Mad);

    let records = detector.detect(&series);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, series.date_at(40).unwrap());
    assert!((records[0].daily_return - 0.18).abs() < 1e-9);
    assert!(records[0].z_score > 3.5);
}

#[test]
fn test_trend_collapse_within_window() {
    let detector = TrendDetector::new(5, 3.5).unwrap();
    let series = calendar_series(150, &[(90, 0.2)]);
    let settled: Vec<_> = detector
        .detect(&series)
        .into_iter()
        .filter(|r| r.anomaly_date >= series.date_at(65).unwrap())
        .collect();

    // Every window containing day 90 is flagged; spacing keeps only the first.
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].anomaly_date, series.date_at(90).unwrap());
    assert!(settled[0].rolling_return > 0.0);
}

#[test]
fn test_extreme_spacing_is_measured_in_calendar_days() {
    // Observation 44 is a Friday, 45 the following Monday.
    let series = trading_series(120, &[(44, 0.15), (45, -0.15)]);
    assert_eq!(series.date_at(44).unwrap().weekday(), Weekday::Fri);
    assert_eq!(series.date_at(45).unwrap().weekday(), Weekday::Mon);

    let detector = ExtremeWindowDetector::new(1, 3.5).unwrap();
    let records = detector.detect(&series);
    assert_eq!(records.len(), 2, "three calendar days apart meets the default gap");

    let strict = detector.with_min_gap_days(4).detect(&series);
    assert_eq!(strict.len(), 1);
    assert_eq!(strict[0].anomaly_date, series.date_at(44).unwrap());
}

#[test]
fn test_persistent_up_then_down() {
    let mut closes = vec![100.0];
    for _ in 0..10 {
        let last = *closes.last().unwrap();
        closes.push(last * 1.01);
    }
    for _ in 0..10 {
        let last = *closes.last().unwrap();
        closes.push(last * 0.99);
    }
    let series = PriceSeries::daily(start(), &closes).unwrap();

    let records = PersistentRunDetector::new(7, 0.5).unwrap().detect(&series);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].direction, Direction::Up);
    assert_eq!(records[1].direction, Direction::Down);
    assert_eq!(records[0].end_date, records[1].start_date);
    assert_eq!(records[0].length, 11);
}

#[test]
fn test_detectors_on_too_short_series_return_nothing() {
    let series = calendar_series(3, &[]);
    assert!(TrendDetector::new(5, 2.0).unwrap().detect(&series).is_empty());
    assert!(ExtremeWindowDetector::new(3, 2.0).unwrap().detect(&series).is_empty());
    assert!(PersistentRunDetector::new(7, 2.0).unwrap().detect(&series).is_empty());
}

#[test]
fn test_invalid_detector_parameters_rejected() {
    assert!(SingleDayDetector::new(0.0).is_err());
    assert!(SingleDayDetector::new(f64::NAN).is_err());
    assert!(TrendDetector::new(0, 2.0).is_err());
    assert!(ExtremeWindowDetector::new(0, 2.0).is_err());
    assert!(PersistentRunDetector::new(0, 2.0).is_err());
}
