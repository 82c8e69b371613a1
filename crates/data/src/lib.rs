//! Price-history loading for time series anomaly detection
//!
//! Reads downloaded daily histories and stored headline archives.

pub use data_facade::*;
