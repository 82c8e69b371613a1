//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that detectors and external
//! collaborators must implement.

mod headline_source;
mod series_detector;

pub use headline_source::HeadlineSource;
pub use series_detector::SeriesDetector;
