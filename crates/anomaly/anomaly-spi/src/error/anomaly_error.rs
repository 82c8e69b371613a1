//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// `EmptySeries`, `InsufficientData` and `InvalidSeries` describe problems with
/// the input data; `ConfigError` and `InvalidParameter` describe problems with
/// the detection configuration. All of them are deterministic, so callers
/// should never retry a failed detection without changing its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnomalyError {
    #[error("Data error: price series is empty")]
    EmptySeries,

    #[error("Data error: insufficient data, required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Data error: invalid series - {0}")]
    InvalidSeries(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl AnomalyError {
    /// True for errors caused by the price series itself.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AnomalyError::EmptySeries
                | AnomalyError::InsufficientData { .. }
                | AnomalyError::InvalidSeries(_)
        )
    }

    /// True for errors caused by the detection configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AnomalyError::ConfigError(_) | AnomalyError::InvalidParameter { .. }
        )
    }

    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        AnomalyError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;
