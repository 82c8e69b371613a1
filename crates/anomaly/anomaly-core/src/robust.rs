//! Median/MAD based robust scoring.
//!
//! The modified z-score of `x` is `0.6745 * (x - median) / MAD` where
//! `MAD = median(|x - median|)`.
//!
//! When more than half of the baseline sits exactly on the median the MAD
//! is zero even though the baseline is not flat. The scale then falls back
//! to the mean absolute deviation, `0.7979 * (x - median) / MeanAD`. Only a
//! baseline with no dispersion at all (every value equal) scores zero.

use anomaly_api::{Baseline, MAD_CONSISTENCY, MEAN_AD_CONSISTENCY};

/// Median of `values`, averaging the two middle elements for even lengths.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median absolute deviation around the median.
pub fn median_absolute_deviation(values: &[f64]) -> Option<f64> {
    let center = median(values)?;
    let deviations: Vec<f64> = values.iter().map(|x| (x - center).abs()).collect();
    median(&deviations)
}

/// Mean absolute deviation around the median.
pub fn mean_absolute_deviation(values: &[f64]) -> Option<f64> {
    let center = median(values)?;
    let total: f64 = values.iter().map(|x| (x - center).abs()).sum();
    Some(total / values.len() as f64)
}

/// Modified z-scores of every element against the whole slice.
///
/// The output has the same length and order as the input.
pub fn modified_z_scores(values: &[f64]) -> Vec<f64> {
    match Scale::of(values) {
        Some(scale) => values.iter().map(|&x| scale.score(x)).collect(),
        None => Vec::new(),
    }
}

/// Modified z-scores against the chosen baseline.
pub fn scores_with_baseline(values: &[f64], baseline: Baseline) -> Vec<f64> {
    match baseline {
        Baseline::WholeSeries => modified_z_scores(values),
        Baseline::Trailing(lookback) => trailing_scores(values, lookback.max(1)),
    }
}

/// Causal scores: each point against the `lookback` values ending at it.
fn trailing_scores(values: &[f64], lookback: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(lookback);
            Scale::of(&values[start..=i])
                .map(|scale| scale.score(values[i]))
                .unwrap_or(0.0)
        })
        .collect()
}

/// Center and dispersion of a baseline.
#[derive(Debug, Clone, Copy)]
struct Scale {
    center: f64,
    mad: f64,
    mean_ad: f64,
}

impl Scale {
    fn of(values: &[f64]) -> Option<Self> {
        Some(Self {
            center: median(values)?,
            mad: median_absolute_deviation(values)?,
            mean_ad: mean_absolute_deviation(values)?,
        })
    }

    fn score(&self, x: f64) -> f64 {
        if self.mad > 0.0 {
            MAD_CONSISTENCY * (x - self.center) / self.mad
        } else if self.mean_ad > 0.0 {
            MEAN_AD_CONSISTENCY * (x - self.center) / self.mean_ad
        } else {
            0.0
        }
    }
}
