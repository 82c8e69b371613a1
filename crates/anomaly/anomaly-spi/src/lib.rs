//! Anomaly Detection Service Provider Interface
//!
//! Defines the price series model, anomaly records, detector contracts and
//! the error type shared by every anomaly crate.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{HeadlineSource, SeriesDetector};
pub use error::{AnomalyError, Result};
pub use model::{
    AnomalyRecord, DetectorKind, Direction, ExtremeAnomaly, Headline, PricePoint, PriceSeries,
    ResultBundle, RunAnomaly, SingleDayAnomaly, TrendAnomaly, ISO_DATE_FORMAT,
};
