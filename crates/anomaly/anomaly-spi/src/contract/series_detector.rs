//! Series detector trait definition.

use crate::model::{DetectorKind, PriceSeries};

/// A batch detector over a complete price series.
///
/// Detectors are pure functions of their input: there is no fit step and no
/// state carried between calls. The returned records are in chronological
/// order and every date they carry exists in `series`.
pub trait SeriesDetector: Send + Sync {
    /// Record type produced for each flagged event.
    type Record;

    /// Which result bundle slot this detector fills.
    fn kind(&self) -> DetectorKind;

    /// Scan the series and return the flagged events.
    ///
    /// Series too short to derive the detector's statistic yield an empty vector.
    fn detect(&self, series: &PriceSeries) -> Vec<Self::Record>;
}
