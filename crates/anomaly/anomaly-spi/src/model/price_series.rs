//! Daily closing price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AnomalyError, Result};

/// One trading day observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date (timezone-naive)
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Chronologically ordered daily closing prices.
///
/// Dates are strictly increasing and every close is finite and positive.
/// Missing trading days are simply absent. The series is immutable once
/// built; detectors only ever borrow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting unordered dates and unusable prices.
    pub fn new(points: Vec<PricePoint>) -> Result<Self> {
        for (i, point) in points.iter().enumerate() {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(AnomalyError::InvalidSeries(format!(
                    "close on {} must be a positive finite number, got {}",
                    point.date, point.close
                )));
            }
            if i > 0 && point.date <= points[i - 1].date {
                return Err(AnomalyError::InvalidSeries(format!(
                    "dates must be strictly increasing: {} follows {}",
                    point.date,
                    points[i - 1].date
                )));
            }
        }
        Ok(Self { points })
    }

    /// Build a series from `(date, close)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(date, close)| PricePoint::new(date, close))
                .collect(),
        )
    }

    /// Build a series of consecutive calendar days starting at `start`.
    pub fn daily(start: NaiveDate, closes: &[f64]) -> Result<Self> {
        Self::from_pairs(start.iter_days().zip(closes.iter().copied()))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Date of the observation at `index`.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.points.get(index).map(|p| p.date)
    }

    /// Whether `date` is one of the observation dates.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.points.binary_search_by(|p| p.date.cmp(&date)).is_ok()
    }

    /// Simple daily returns, `close[i] / close[i - 1] - 1`.
    ///
    /// Element `k` is the return realised on observation `k + 1`.
    pub fn returns(&self) -> Vec<f64> {
        self.points
            .windows(2)
            .map(|w| w[1].close / w[0].close - 1.0)
            .collect()
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<PricePoint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        PriceSeries::new(raw.points).map_err(serde::de::Error::custom)
    }
}
