//! Runs every detector over one series with a shared configuration.

use anomaly_api::DetectionConfig;
use anomaly_spi::{AnomalyError, DetectorKind, PriceSeries, Result, ResultBundle, SeriesDetector};
use tracing::{debug, info, warn};

use crate::detectors::{
    ExtremeWindowDetector, PersistentRunDetector, SingleDayDetector, TrendDetector,
};

/// Minimum observations needed for a single return.
const MIN_OBSERVATIONS: usize = 2;

/// Detection orchestrator.
///
/// Holds one immutable [`DetectionConfig`] and applies the four detectors
/// to a series. Each call is independent: nothing is cached between runs,
/// so identical inputs always produce identical bundles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionOrchestrator {
    config: DetectionConfig,
}

/// The four detectors built from one configuration.
struct DetectorSet {
    single_day: SingleDayDetector,
    trend: TrendDetector,
    extreme: ExtremeWindowDetector,
    persistent: PersistentRunDetector,
}

impl DetectorSet {
    fn from_config(config: &DetectionConfig) -> Result<Self> {
        Ok(Self {
            single_day: SingleDayDetector::from_config(config)?,
            trend: TrendDetector::from_config(config)?,
            extreme: ExtremeWindowDetector::from_config(config)?,
            persistent: PersistentRunDetector::from_config(config)?,
        })
    }
}

impl DetectionOrchestrator {
    /// Create an orchestrator, validating the configuration.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an orchestrator with the full built-in configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: DetectionConfig::default(),
        }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    fn check_series(&self, series: &PriceSeries) -> Result<()> {
        let n = series.len();
        if n == 0 {
            return Err(AnomalyError::EmptySeries);
        }
        if n < MIN_OBSERVATIONS {
            return Err(AnomalyError::InsufficientData {
                required: MIN_OBSERVATIONS,
                got: n,
            });
        }
        let widest = self
            .config
            .rolling_window
            .max(self.config.extreme_window + 1)
            .max(self.config.persistent_min_days);
        if n <= widest {
            warn!(
                observations = n,
                widest_window = widest,
                "series shorter than a detector window, some detectors cannot flag anything"
            );
        }
        Ok(())
    }

    /// Run the four detectors one after another.
    pub fn run(&self, series: &PriceSeries) -> Result<ResultBundle> {
        self.check_series(series)?;
        let set = DetectorSet::from_config(&self.config)?;
        let bundle = ResultBundle {
            mad: run_one(&set.single_day, series),
            rolling: run_one(&set.trend, series),
            extreme: run_one(&set.extreme, series),
            persistent: run_one(&set.persistent, series),
        };
        log_summary(series, &bundle);
        Ok(bundle)
    }

    /// Run the four detectors on the rayon pool.
    ///
    /// Produces exactly the same bundle as [`run`](Self::run).
    pub fn run_parallel(&self, series: &PriceSeries) -> Result<ResultBundle> {
        self.check_series(series)?;
        let set = DetectorSet::from_config(&self.config)?;
        let ((mad, rolling), (extreme, persistent)) = rayon::join(
            || {
                rayon::join(
                    || run_one(&set.single_day, series),
                    || run_one(&set.trend, series),
                )
            },
            || {
                rayon::join(
                    || run_one(&set.extreme, series),
                    || run_one(&set.persistent, series),
                )
            },
        );
        let bundle = ResultBundle {
            mad,
            rolling,
            extreme,
            persistent,
        };
        log_summary(series, &bundle);
        Ok(bundle)
    }
}

impl Default for DetectionOrchestrator {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Run every detector over `series` with `config`.
pub fn detect_all_anomalies(series: &PriceSeries, config: DetectionConfig) -> Result<ResultBundle> {
    DetectionOrchestrator::new(config)?.run(series)
}

fn run_one<D: SeriesDetector>(detector: &D, series: &PriceSeries) -> Vec<D::Record> {
    let records = detector.detect(series);
    debug!(
        detector = %detector.kind(),
        flagged = records.len(),
        "detector finished"
    );
    records
}

fn log_summary(series: &PriceSeries, bundle: &ResultBundle) {
    info!(
        observations = series.len(),
        mad = bundle.count(DetectorKind::Mad),
        rolling = bundle.count(DetectorKind::Rolling),
        extreme = bundle.count(DetectorKind::Extreme),
        persistent = bundle.count(DetectorKind::Persistent),
        "anomaly detection complete"
    );
}
