//! Anomaly Detection API
//!
//! Configuration types and builders for anomaly detection.

use std::io::Read;

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{AnomalyError, Result};

// ============================================================================
// Fixed constants
// ============================================================================

/// Consistency constant that makes MAD comparable to a standard deviation.
pub const MAD_CONSISTENCY: f64 = 0.6745;

/// Consistency constant for the mean absolute deviation, used when the MAD
/// of a baseline is zero but its values are not all equal.
pub const MEAN_AD_CONSISTENCY: f64 = 0.7979;

/// Lookback, in observations, of the trend detector's local baseline.
pub const TREND_LOOKBACK: usize = 60;

/// Default minimum calendar-day gap between reported extreme-window events.
pub const DEFAULT_MIN_GAP_DAYS: i64 = 3;

// ============================================================================
// Scoring baseline
// ============================================================================

/// Which values the median and MAD of a robust score are taken over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// One median/MAD pair over the whole input.
    #[default]
    WholeSeries,
    /// A causal median/MAD over the last `n` values ending at each point,
    /// or every value so far when fewer than `n` are available.
    Trailing(usize),
}

// ============================================================================
// Detection configuration
// ============================================================================

/// Complete tunable surface of the four detectors.
///
/// Either every field is supplied or the whole built-in set is used via
/// [`DetectionConfig::default`]. Deserialization has no per-field defaults
/// and rejects unknown keys, so a misspelt field is an error instead of a
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionConfig {
    /// Single-day modified z-score threshold.
    pub mad_threshold: f64,
    /// Trend detector window, in observations.
    pub rolling_window: usize,
    /// Trend detector modified z-score threshold.
    pub rolling_threshold: f64,
    /// Extreme-window detector window, in daily returns.
    pub extreme_window: usize,
    /// Extreme-window detector modified z-score threshold.
    pub extreme_threshold: f64,
    /// Minimum run length, in observations.
    pub persistent_min_days: usize,
    /// Cross-run modified z-score threshold.
    pub persistent_threshold: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            mad_threshold: 3.5,
            rolling_window: 5,
            rolling_threshold: 3.5,
            extreme_window: 3,
            extreme_threshold: 3.5,
            persistent_min_days: 7,
            persistent_threshold: 3.5,
        }
    }
}

impl DetectionConfig {
    /// Create a fully specified configuration.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mad_threshold: f64,
        rolling_window: usize,
        rolling_threshold: f64,
        extreme_window: usize,
        extreme_threshold: f64,
        persistent_min_days: usize,
        persistent_threshold: f64,
    ) -> Result<Self> {
        let config = Self {
            mad_threshold,
            rolling_window,
            rolling_threshold,
            extreme_window,
            extreme_threshold,
            persistent_min_days,
            persistent_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object carrying all seven fields.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AnomalyError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document from a reader.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)
            .map_err(|e| AnomalyError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value is in range.
    pub fn validate(&self) -> Result<()> {
        check_threshold("mad_threshold", self.mad_threshold)?;
        check_window("rolling_window", self.rolling_window)?;
        check_threshold("rolling_threshold", self.rolling_threshold)?;
        check_window("extreme_window", self.extreme_window)?;
        check_threshold("extreme_threshold", self.extreme_threshold)?;
        check_window("persistent_min_days", self.persistent_min_days)?;
        check_threshold("persistent_threshold", self.persistent_threshold)?;
        Ok(())
    }
}

fn check_threshold(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AnomalyError::invalid_parameter(
            name,
            format!("must be a positive finite number, got {}", value),
        ));
    }
    Ok(())
}

fn check_window(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(AnomalyError::invalid_parameter(name, "must be at least 1"));
    }
    Ok(())
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`DetectionConfig`].
///
/// `new()` starts empty and `build()` fails unless every field was set.
/// `defaults()` starts from the full built-in set, for callers that want
/// to override a few values knowingly.
#[derive(Debug, Clone, Default)]
pub struct DetectionConfigBuilder {
    mad_threshold: Option<f64>,
    rolling_window: Option<usize>,
    rolling_threshold: Option<f64>,
    extreme_window: Option<usize>,
    extreme_threshold: Option<f64>,
    persistent_min_days: Option<usize>,
    persistent_threshold: Option<f64>,
}

impl DetectionConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder pre-filled with the built-in defaults.
    pub fn defaults() -> Self {
        let d = DetectionConfig::default();
        Self {
            mad_threshold: Some(d.mad_threshold),
            rolling_window: Some(d.rolling_window),
            rolling_threshold: Some(d.rolling_threshold),
            extreme_window: Some(d.extreme_window),
            extreme_threshold: Some(d.extreme_threshold),
            persistent_min_days: Some(d.persistent_min_days),
            persistent_threshold: Some(d.persistent_threshold),
        }
    }

    pub fn mad_threshold(mut self, value: f64) -> Self {
        self.mad_threshold = Some(value);
        self
    }

    pub fn rolling_window(mut self, value: usize) -> Self {
        self.rolling_window = Some(value);
        self
    }

    pub fn rolling_threshold(mut self, value: f64) -> Self {
        self.rolling_threshold = Some(value);
        self
    }

    pub fn extreme_window(mut self, value: usize) -> Self {
        self.extreme_window = Some(value);
        self
    }

    pub fn extreme_threshold(mut self, value: f64) -> Self {
        self.extreme_threshold = Some(value);
        self
    }

    pub fn persistent_min_days(mut self, value: usize) -> Self {
        self.persistent_min_days = Some(value);
        self
    }

    pub fn persistent_threshold(mut self, value: f64) -> Self {
        self.persistent_threshold = Some(value);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<DetectionConfig> {
        DetectionConfig::new(
            require(self.mad_threshold, "mad_threshold")?,
            require(self.rolling_window, "rolling_window")?,
            require(self.rolling_threshold, "rolling_threshold")?,
            require(self.extreme_window, "extreme_window")?,
            require(self.extreme_threshold, "extreme_threshold")?,
            require(self.persistent_min_days, "persistent_min_days")?,
            require(self.persistent_threshold, "persistent_threshold")?,
        )
    }
}

fn require<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| AnomalyError::ConfigError(format!("{} is required", name)))
}
