//! Price-history loading configuration.

use data_spi::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Header of the date column in a downloaded history file.
pub const DEFAULT_DATE_COLUMN: &str = "Date";

/// Header of the closing-price column in a downloaded history file.
pub const DEFAULT_CLOSE_COLUMN: &str = "Close";

/// How to read a delimited price-history file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Header of the date column
    pub date_column: String,
    /// Header of the closing-price column
    pub close_column: String,
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            close_column: DEFAULT_CLOSE_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

impl LoadConfig {
    /// Create a comma-separated configuration with the given columns.
    pub fn new(date_column: &str, close_column: &str) -> Self {
        Self {
            date_column: date_column.to_string(),
            close_column: close_column.to_string(),
            delimiter: b',',
        }
    }

    /// Create a builder.
    pub fn builder() -> LoadConfigBuilder {
        LoadConfigBuilder::new()
    }

    /// Check the column names are usable.
    pub fn validate(&self) -> Result<()> {
        if self.date_column.trim().is_empty() {
            return Err(DataError::ConfigError("date_column must not be empty".to_string()));
        }
        if self.close_column.trim().is_empty() {
            return Err(DataError::ConfigError("close_column must not be empty".to_string()));
        }
        if self.date_column == self.close_column {
            return Err(DataError::ConfigError(format!(
                "date and close columns are both '{}'",
                self.date_column
            )));
        }
        Ok(())
    }
}

/// Builder for LoadConfig.
///
/// Unset fields take the defaults of a downloaded daily history file.
#[derive(Debug, Default)]
pub struct LoadConfigBuilder {
    date_column: Option<String>,
    close_column: Option<String>,
    delimiter: Option<u8>,
}

impl LoadConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date column header.
    pub fn date_column(mut self, name: &str) -> Self {
        self.date_column = Some(name.to_string());
        self
    }

    /// Set the close column header.
    pub fn close_column(mut self, name: &str) -> Self {
        self.close_column = Some(name.to_string());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<LoadConfig> {
        let defaults = LoadConfig::default();
        let config = LoadConfig {
            date_column: self.date_column.unwrap_or(defaults.date_column),
            close_column: self.close_column.unwrap_or(defaults.close_column),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
        };
        config.validate()?;
        Ok(config)
    }
}
