//! Anomaly record types, one per detector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Single-day return shock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleDayAnomaly {
    /// Day on which the return was realised
    pub date: NaiveDate,
    /// Closing price on `date`
    pub close: f64,
    /// Return from the previous observation to `date`
    #[serde(rename = "return")]
    pub daily_return: f64,
    /// Modified z-score against the whole return history
    pub z_score: f64,
}

/// Multi-day trend shift, reported at the end of its window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnomaly {
    pub anomaly_date: NaiveDate,
    /// `close[t] / close[t - window] - 1`
    pub rolling_return: f64,
    /// Modified z-score against the trailing local baseline
    pub z_score: f64,
}

/// Extreme compounded move over a short fixed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtremeAnomaly {
    pub anomaly_date: NaiveDate,
    /// Compounded return of the window ending on `anomaly_date`
    pub rolling_return: f64,
    /// Modified z-score against the whole-series baseline
    pub z_score: f64,
}

/// Direction of a persistent run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// `Up` for a positive cumulative return, `Down` otherwise.
    pub fn from_return(cumulative_return: f64) -> Self {
        if cumulative_return > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persistent same-direction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunAnomaly {
    /// Observation the run starts from (the close before its first return)
    pub start_date: NaiveDate,
    /// Last observation of the run
    pub end_date: NaiveDate,
    /// Number of observations spanned, both ends included
    pub length: usize,
    /// Compounded return over the run's nonzero daily returns
    pub cumulative_return: f64,
    /// Modified z-score among all runs that met the length requirement
    pub z_score: f64,
    pub direction: Direction,
}

/// Any detector's record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnomalyRecord {
    SingleDay(SingleDayAnomaly),
    Trend(TrendAnomaly),
    Extreme(ExtremeAnomaly),
    Run(RunAnomaly),
}

impl AnomalyRecord {
    /// The date used as the news lookup key.
    ///
    /// Runs are keyed by the day they started.
    pub fn primary_date(&self) -> NaiveDate {
        match self {
            AnomalyRecord::SingleDay(r) => r.date,
            AnomalyRecord::Trend(r) => r.anomaly_date,
            AnomalyRecord::Extreme(r) => r.anomaly_date,
            AnomalyRecord::Run(r) => r.start_date,
        }
    }

    /// Every date carried by the record.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match self {
            AnomalyRecord::Run(r) => vec![r.start_date, r.end_date],
            other => vec![other.primary_date()],
        }
    }
}

impl From<SingleDayAnomaly> for AnomalyRecord {
    fn from(record: SingleDayAnomaly) -> Self {
        AnomalyRecord::SingleDay(record)
    }
}

impl From<TrendAnomaly> for AnomalyRecord {
    fn from(record: TrendAnomaly) -> Self {
        AnomalyRecord::Trend(record)
    }
}

impl From<ExtremeAnomaly> for AnomalyRecord {
    fn from(record: ExtremeAnomaly) -> Self {
        AnomalyRecord::Extreme(record)
    }
}

impl From<RunAnomaly> for AnomalyRecord {
    fn from(record: RunAnomaly) -> Self {
        AnomalyRecord::Run(record)
    }
}
