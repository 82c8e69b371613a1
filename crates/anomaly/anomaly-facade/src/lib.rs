//! Anomaly Detection Facade
//!
//! Unified re-exports for the price anomaly detection module.
//!
//! This facade provides a single entry point to all anomaly detection functionality:
//! - `SeriesDetector` and `HeadlineSource` traits, records and `ResultBundle` from SPI
//! - `DetectionConfig` and its builder from API
//! - The four detectors, `DetectionOrchestrator` and news enrichment from Core

// Re-export everything from SPI
pub use anomaly_spi::*;

// Re-export everything from API
pub use anomaly_api::*;

// Re-export everything from Core
pub use anomaly_core::*;
