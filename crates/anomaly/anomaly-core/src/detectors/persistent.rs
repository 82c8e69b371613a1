//! Persistent directional run detector.

use std::cmp::Ordering;

use anomaly_api::DetectionConfig;
use anomaly_spi::{DetectorKind, Direction, PriceSeries, Result, RunAnomaly, SeriesDetector};

use super::{check_threshold, check_window};
use crate::robust::modified_z_scores;

/// Flags long same-direction runs whose compounded return is extreme
/// compared with the other long runs.
///
/// A run is a maximal stretch of daily returns sharing a sign. Zero returns
/// neither break a run nor move its compounded return. A run starts at the
/// close before its first nonzero return and ends at the close before the
/// direction flips, so consecutive runs share their boundary observation.
/// Length counts observations, both ends included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersistentRunDetector {
    min_days: usize,
    threshold: f64,
}

/// A segmented run, before scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Run {
    pub start: usize,
    pub end: usize,
    /// Product of `(1 + r)` over the run's returns.
    pub growth: f64,
}

impl Run {
    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn cumulative_return(&self) -> f64 {
        self.growth - 1.0
    }
}

enum Step {
    Return(f64),
    End,
}

fn sign(r: f64) -> i8 {
    match r.partial_cmp(&0.0) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        _ => 0,
    }
}

/// Split the series into maximal same-direction runs.
///
/// The end of the series is fed through the loop as one more step that
/// closes whatever run is open, so the trailing run goes through the same
/// branch as every interior run. A stretch of only zero returns never gets
/// a direction and is not a run.
pub(crate) fn segment_runs(closes: &[f64]) -> Vec<Run> {
    let n = closes.len();
    let mut runs = Vec::new();
    let mut direction = 0i8;
    let mut start = 0usize;
    let mut growth = 1.0;

    for i in 1..=n {
        let step = if i < n {
            Step::Return(closes[i] / closes[i - 1] - 1.0)
        } else {
            Step::End
        };

        match step {
            Step::Return(r) if direction == 0 => {
                direction = sign(r);
                start = i - 1;
                growth = 1.0 + r;
            }
            Step::Return(r) if sign(r) == direction || sign(r) == 0 => {
                growth *= 1.0 + r;
            }
            Step::Return(r) => {
                runs.push(Run {
                    start,
                    end: i - 1,
                    growth,
                });
                direction = sign(r);
                start = i - 1;
                growth = 1.0 + r;
            }
            Step::End => {
                if direction != 0 {
                    runs.push(Run {
                        start,
                        end: n - 1,
                        growth,
                    });
                }
            }
        }
    }
    runs
}

impl PersistentRunDetector {
    pub fn new(min_days: usize, threshold: f64) -> Result<Self> {
        check_window("min_days", min_days)?;
        check_threshold(threshold)?;
        Ok(Self {
            min_days,
            threshold,
        })
    }

    /// Create from configuration.
    pub fn from_config(config: &DetectionConfig) -> Result<Self> {
        Self::new(config.persistent_min_days, config.persistent_threshold)
    }

    pub fn min_days(&self) -> usize {
        self.min_days
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SeriesDetector for PersistentRunDetector {
    type Record = RunAnomaly;

    fn kind(&self) -> DetectorKind {
        DetectorKind::Persistent
    }

    fn detect(&self, series: &PriceSeries) -> Vec<RunAnomaly> {
        let qualifying: Vec<Run> = segment_runs(&series.closes())
            .into_iter()
            .filter(|run| run.length() >= self.min_days)
            .collect();
        if qualifying.is_empty() {
            return Vec::new();
        }

        let cumulative: Vec<f64> = qualifying.iter().map(Run::cumulative_return).collect();
        let scores = modified_z_scores(&cumulative);
        let points = series.points();

        qualifying
            .iter()
            .zip(scores.iter())
            .filter(|(_, score)| score.abs() > self.threshold)
            .map(|(run, &z_score)| {
                let cumulative_return = run.cumulative_return();
                RunAnomaly {
                    start_date: points[run.start].date,
                    end_date: points[run.end].date,
                    length: run.length(),
                    cumulative_return,
                    z_score,
                    direction: Direction::from_return(cumulative_return),
                }
            })
            .collect()
    }
}
