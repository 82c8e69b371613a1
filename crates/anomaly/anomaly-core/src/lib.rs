//! Anomaly Detection Core
//!
//! Robust statistics, the four price-series detectors, the orchestrator that
//! runs them together, and news enrichment of the flagged dates.

pub mod robust;
pub mod spacing;

mod detectors;
mod enrichment;
mod orchestrator;

pub use detectors::*;
pub use enrichment::*;
pub use orchestrator::*;
