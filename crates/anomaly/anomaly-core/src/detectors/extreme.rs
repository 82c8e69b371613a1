//! Extreme compounded-move detector.

use anomaly_api::{Baseline, DetectionConfig, DEFAULT_MIN_GAP_DAYS};
use anomaly_spi::{DetectorKind, ExtremeAnomaly, PriceSeries, Result, SeriesDetector};
use chrono::NaiveDate;

use super::{check_threshold, check_window};
use crate::robust::scores_with_baseline;
use crate::spacing::enforce_min_spacing;

/// Flags short fixed-window compounded returns that are outliers against the
/// whole series.
///
/// Unlike [`TrendDetector`](super::TrendDetector) the baseline is the whole
/// history, not a trailing window. Reported events are at least
/// `min_gap_days` calendar days apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremeWindowDetector {
    window: usize,
    threshold: f64,
    min_gap_days: i64,
}

impl ExtremeWindowDetector {
    pub fn new(window: usize, threshold: f64) -> Result<Self> {
        check_window("window", window)?;
        check_threshold(threshold)?;
        Ok(Self {
            window,
            threshold,
            min_gap_days: DEFAULT_MIN_GAP_DAYS,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.extreme_window, config.extreme_threshold)
    }

    /// Override the minimum gap between reported events (default 3 days).
    pub fn with_min_gap_days(mut self, min_gap_days: i64) -> Self {
        self.min_gap_days = min_gap_days;
        self
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn min_gap_days(&self) -> i64 {
        self.min_gap_days
    }

    /// Compounded return of each run of `window` consecutive daily returns,
    /// paired with the date of its last return.
    fn compounded_returns(&self, series: &PriceSeries) -> Vec<(NaiveDate, f64)> {
        let returns = series.returns();
        if returns.len() < self.window {
            return Vec::new();
        }
        let points = series.points();
        returns
            .windows(self.window)
            .enumerate()
            .map(|(start, span)| {
                let growth: f64 = span.iter().map(|r| 1.0 + r).product();
                // span ends at returns[start + window - 1], realised on the next point
                (points[start + self.window].date, growth - 1.0)
            })
            .collect()
    }
}

impl SeriesDetector for ExtremeWindowDetector {
    type Record = ExtremeAnomaly;

    fn kind(&self) -> DetectorKind {
        DetectorKind::Extreme
    }

    fn detect(&self, series: &PriceSeries) -> Vec<ExtremeAnomaly> {
        let compounded = self.compounded_returns(series);
        let values: Vec<f64> = compounded.iter().map(|(_, r)| *r).collect();
        let scores = scores_with_baseline(&values, Baseline::WholeSeries);

        let flagged: Vec<ExtremeAnomaly> = compounded
            .iter()
            .zip(scores.iter())
            .filter(|(_, score)| score.abs() > self.threshold)
            .map(|(&(anomaly_date, rolling_return), &z_score)| ExtremeAnomaly {
                anomaly_date,
                rolling_return,
                z_score,
            })
            .collect();

        let dates: Vec<NaiveDate> = flagged.iter().map(|a| a.anomaly_date).collect();
        enforce_min_spacing(&dates, self.min_gap_days)
            .into_iter()
            .map(|i| flagged[i].clone())
            .collect()
    }
}
