//! Price Data API
//!
//! Configuration types and builders for loading price history.

mod config;

pub use config::{LoadConfig, LoadConfigBuilder, DEFAULT_CLOSE_COLUMN, DEFAULT_DATE_COLUMN};

// Re-export SPI types
pub use data_spi::{DataError, Result};
