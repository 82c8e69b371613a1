//! Data models for anomaly detection.
//!
//! This module contains the price series input, the per-detector anomaly
//! records and the result bundle returned by the orchestrator.

mod bundle;
mod headline;
mod price_series;
mod record;

pub use bundle::{DetectorKind, ResultBundle};
pub use headline::Headline;
pub use price_series::{PricePoint, PriceSeries};
pub use record::{
    AnomalyRecord, Direction, ExtremeAnomaly, RunAnomaly, SingleDayAnomaly, TrendAnomaly,
};

/// Date format used at every external boundary.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
