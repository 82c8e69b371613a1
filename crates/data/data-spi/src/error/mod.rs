//! Error types for price-history ingestion.

mod data_error;

pub use data_error::{DataError, Result};
