//! # anomaly
//!
//! Robust anomaly detection for daily closing-price series.
//! Flags single-day shocks, unusual short-horizon trends, extreme
//! multi-day windows and persistent one-directional runs.

pub use anomaly_facade::*;
