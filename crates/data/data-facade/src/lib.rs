//! Price Data Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all price-history functionality:
//! - `data_spi` - `PriceSource` trait, `Quote` and errors
//! - `data_api` - `LoadConfig` and its builder
//! - `data_core` - Implementations (CSV files, JSON headline archives)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{closing_prices, CsvPriceSource, PriceSource};
//!
//! let quotes = CsvPriceSource::new("data/AAPL_history.csv").load().unwrap();
//! let prices = closing_prices(&quotes);
//! println!("Got {} price points", prices.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
