//! The four price anomaly detectors.

mod extreme;
mod persistent;
mod single_day;
mod trend;

pub use extreme::ExtremeWindowDetector;
pub use persistent::PersistentRunDetector;
pub use single_day::SingleDayDetector;
pub use trend::TrendDetector;

use anomaly_spi::{AnomalyError, Result};

pub(crate) fn check_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(AnomalyError::invalid_parameter(
            "threshold",
            "must be a positive finite number",
        ));
    }
    Ok(())
}

pub(crate) fn check_window(name: &str, window: usize) -> Result<()> {
    if window == 0 {
        return Err(AnomalyError::invalid_parameter(name, "must be at least 1"));
    }
    Ok(())
}
