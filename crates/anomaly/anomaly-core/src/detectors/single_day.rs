//! Single-day return shock detector.

use anomaly_api::DetectionConfig;
use anomaly_spi::{DetectorKind, PriceSeries, Result, SeriesDetector, SingleDayAnomaly};

use super::check_threshold;
use crate::robust::modified_z_scores;

/// Flags days whose return is an outlier against the whole return history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleDayDetector {
    threshold: f64,
}

impl SingleDayDetector {
    /// Create a detector flagging `|score| > threshold`.
    pub fn new(threshold: f64) -> Result<Self> {
        check_threshold(threshold)?;
        Ok(Self { threshold })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.mad_threshold)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SeriesDetector for SingleDayDetector {
    type Record = SingleDayAnomaly;

    fn kind(&self) -> DetectorKind {
        DetectorKind::Mad
    }

    fn detect(&self, series: &PriceSeries) -> Vec<SingleDayAnomaly> {
        let returns = series.returns();
        let scores = modified_z_scores(&returns);
        let points = series.points();

        // returns[k] belongs to points[k + 1]; the first day has no return.
        returns
            .iter()
            .zip(scores.iter())
            .zip(points.iter().skip(1))
            .filter(|((_, score), _)| score.abs() > self.threshold)
            .map(|((&daily_return, &z_score), point)| SingleDayAnomaly {
                date: point.date,
                close: point.close,
                daily_return,
                z_score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::fixtures::{date, noisy_series, series};

    #[test]
    fn test_rejects_non_positive_threshold() {
        assert!(SingleDayDetector::new(0.0).is_err());
        assert!(SingleDayDetector::new(-1.0).is_err());
        assert!(SingleDayDetector::new(2.5).is_ok());
    }

    #[test]
    fn test_short_series_yields_nothing() {
        let detector = SingleDayDetector::new(2.5).unwrap();
        assert!(detector.detect(&series(&[])).is_empty());
        assert!(detector.detect(&series(&[100.0])).is_empty());
    }

    #[test]
    fn test_flags_doubling_day() {
        // Returns are [0, 0, 0, 1, -0.5, 0]; the MAD is zero so the mean
        // deviation scale applies and only the doubling stands out.
        let prices = series(&[100.0, 100.0, 100.0, 100.0, 200.0, 100.0, 100.0]);
        let anomalies = SingleDayDetector::new(2.5).unwrap().detect(&prices);

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].date, date(4));
        assert_eq!(anomalies[0].daily_return, 1.0);
        assert_eq!(anomalies[0].close, 200.0);
    }

    #[test]
    fn test_flat_series_has_no_anomalies() {
        let flat = series(&[50.0; 12]);
        assert!(SingleDayDetector::new(0.1).unwrap().detect(&flat).is_empty());
    }

    #[test]
    fn test_single_outlier_on_correct_date() {
        let prices = noisy_series(40, &[(25, 0.15)]);
        let detector = SingleDayDetector::new(3.5).unwrap();
        let anomalies = detector.detect(&prices);

        assert_eq!(anomalies.len(), 1);
        let hit = &anomalies[0];
        assert_eq!(hit.date, date(25));
        assert!((hit.daily_return - 0.15).abs() < 1e-9);
        assert!(hit.z_score > 3.5);
        assert_eq!(hit.close, prices.points()[25].close);
    }

    #[test]
    fn test_negative_shock_has_negative_score() {
        let prices = noisy_series(40, &[(10, -0.2)]);
        let anomalies = SingleDayDetector::new(3.5).unwrap().detect(&prices);
        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].date, date(10));
        assert!(anomalies[0].z_score < -3.5);
    }

    #[test]
    fn test_kind() {
        assert_eq!(SingleDayDetector::new(1.0).unwrap().kind(), DetectorKind::Mad);
    }
}
