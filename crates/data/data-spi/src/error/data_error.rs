//! Data error types.

use thiserror::Error;

/// Price-history ingestion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// Reading the input failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Failed to parse a row or document
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid date cell
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Required column absent from the header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Input held no rows
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error() {
        let error = DataError::ParseError("row 3: invalid close 'n/a'".to_string());
        assert_eq!(error.to_string(), "Parse error: row 3: invalid close 'n/a'");
    }

    #[test]
    fn test_invalid_date_error() {
        let error = DataError::InvalidDate("2024-13-45".to_string());
        assert_eq!(error.to_string(), "Invalid date: 2024-13-45");
    }

    #[test]
    fn test_missing_column_error() {
        let error = DataError::MissingColumn("Close".to_string());
        assert_eq!(error.to_string(), "Missing column: Close");
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(DataError::NoData.to_string(), "No data returned");
    }

    #[test]
    fn test_config_error() {
        let error = DataError::ConfigError("close_column must not be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: close_column must not be empty"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "prices.csv");
        let error: DataError = io.into();
        assert!(matches!(error, DataError::Io(ref msg) if msg.contains("prices.csv")));
    }

    #[test]
    fn test_result_type_err() {
        let result: Result<i32> = Err(DataError::NoData);
        assert!(matches!(result.unwrap_err(), DataError::NoData));
    }

    #[test]
    fn test_error_is_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(DataError::Io("denied".to_string()));
        assert_eq!(error.to_string(), "I/O error: denied");
    }
}
