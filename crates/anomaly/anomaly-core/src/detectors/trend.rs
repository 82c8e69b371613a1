//! Multi-day trend shift detector.

use anomaly_api::{Baseline, DetectionConfig, TREND_LOOKBACK};
use anomaly_spi::{DetectorKind, PriceSeries, Result, SeriesDetector, TrendAnomaly};
use chrono::NaiveDate;

use super::{check_threshold, check_window};
use crate::robust::scores_with_baseline;
use crate::spacing::enforce_min_spacing;

/// Flags windowed returns that are outliers against a trailing local baseline.
///
/// The rolling return at `t` is `close[t] / close[t - window] - 1`. Each one
/// is scored against the median and MAD of the last `lookback` rolling
/// returns ending at `t`, so the baseline adapts to changing volatility
/// without looking ahead. A trend event stays elevated for several days;
/// flags closer than `window` calendar days to the last reported one are
/// folded into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendDetector {
    window: usize,
    threshold: f64,
    lookback: usize,
}

impl TrendDetector {
    pub fn new(window: usize, threshold: f64) -> Result<Self> {
        check_window("window", window)?;
        check_threshold(threshold)?;
        Ok(Self {
            window,
            threshold,
            lookback: TREND_LOOKBACK,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.rolling_window, config.rolling_threshold)
    }

    /// Override the trailing baseline length (default 60 observations).
    pub fn with_lookback(mut self, lookback: usize) -> Result<Self> {
        check_window("lookback", lookback)?;
        self.lookback = lookback;
        Ok(self)
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Rolling returns paired with the date they end on.
    fn rolling_returns(&self, series: &PriceSeries) -> Vec<(NaiveDate, f64)> {
        let points = series.points();
        if points.len() <= self.window {
            return Vec::new();
        }
        points
            .iter()
            .zip(points.iter().skip(self.window))
            .map(|(past, now)| (now.date, now.close / past.close - 1.0))
            .collect()
    }
}

impl SeriesDetector for TrendDetector {
    type Record = TrendAnomaly;

    fn kind(&self) -> DetectorKind {
        DetectorKind::Rolling
    }

    fn detect(&self, series: &PriceSeries) -> Vec<TrendAnomaly> {
        let rolling = self.rolling_returns(series);
        let values: Vec<f64> = rolling.iter().map(|(_, r)| *r).collect();
        let scores = scores_with_baseline(&values, Baseline::Trailing(self.lookback));

        let flagged: Vec<TrendAnomaly> = rolling
            .iter()
            .zip(scores.iter())
            .filter(|(_, score)| score.abs() > self.threshold)
            .map(|(&(anomaly_date, rolling_return), &z_score)| TrendAnomaly {
                anomaly_date,
                rolling_return,
                z_score,
            })
            .collect();

        let dates: Vec<NaiveDate> = flagged.iter().map(|a| a.anomaly_date).collect();
        enforce_min_spacing(&dates, self.window as i64)
            .into_iter()
            .map(|i| flagged[i].clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::fixtures::{date, noisy_series, series};

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(TrendDetector::new(0, 3.5).is_err());
        assert!(TrendDetector::new(5, 0.0).is_err());
        assert!(TrendDetector::new(5, 3.5).unwrap().with_lookback(0).is_err());
    }

    #[test]
    fn test_defaults_to_sixty_day_lookback() {
        let detector = TrendDetector::new(5, 3.5).unwrap();
        assert_eq!(detector.lookback(), 60);
        assert_eq!(detector.window(), 5);
    }

    #[test]
    fn test_series_not_longer_than_window_yields_nothing() {
        let detector = TrendDetector::new(5, 1.0).unwrap();
        assert!(detector.detect(&series(&[1.0, 2.0, 3.0, 4.0, 5.0])).is_empty());
    }

    #[test]
    fn test_rolling_return_values() {
        let detector = TrendDetector::new(2, 1.0).unwrap();
        let rolling = detector.rolling_returns(&series(&[100.0, 110.0, 120.0, 99.0]));
        assert_eq!(rolling.len(), 2);
        assert_eq!(rolling[0].0, date(2));
        assert!((rolling[0].1 - 0.2).abs() < 1e-12);
        assert!((rolling[1].1 - (99.0 / 110.0 - 1.0)).abs() < 1e-12);
    }

    /// Anomalies once the trailing baseline holds a full lookback.
    ///
    /// The first few baselines hold a handful of values, where a near-tie
    /// can make the MAD tiny; those early flags are not under test here.
    fn settled(anomalies: Vec<TrendAnomaly>) -> Vec<TrendAnomaly> {
        anomalies
            .into_iter()
            .filter(|a| a.anomaly_date >= date(65))
            .collect()
    }

    #[test]
    fn test_elevated_window_collapses_to_one_event() {
        // The shock keeps the 5-day return elevated on days 80..=84.
        let prices = noisy_series(120, &[(80, 0.2)]);
        let anomalies = settled(TrendDetector::new(5, 3.5).unwrap().detect(&prices));

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].anomaly_date, date(80));
        assert!(anomalies[0].rolling_return > 0.19);
        assert!(anomalies[0].z_score > 3.5);
    }

    #[test]
    fn test_events_more_than_a_window_apart_both_survive() {
        let prices = noisy_series(120, &[(80, 0.2), (86, -0.2)]);
        let anomalies = settled(TrendDetector::new(5, 3.5).unwrap().detect(&prices));

        let dates: Vec<NaiveDate> = anomalies.iter().map(|a| a.anomaly_date).collect();
        assert_eq!(dates, vec![date(80), date(86)]);
        assert!(anomalies[1].rolling_return < 0.0);
    }

    #[test]
    fn test_output_is_chronological_and_spaced() {
        let prices = noisy_series(200, &[(80, 0.2), (82, 0.15), (110, -0.25), (150, 0.3)]);
        let anomalies = TrendDetector::new(5, 3.5).unwrap().detect(&prices);
        for pair in anomalies.windows(2) {
            assert!((pair[1].anomaly_date - pair[0].anomaly_date).num_days() >= 5);
        }
        assert!(anomalies.iter().all(|a| prices.contains(a.anomaly_date)));
    }

    #[test]
    fn test_flat_series_has_no_anomalies() {
        let prices = series(&[10.0; 90]);
        assert!(TrendDetector::new(5, 0.5).unwrap().detect(&prices).is_empty());
    }
}
