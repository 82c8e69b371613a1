//! Price Data Service Provider Interface
//!
//! Defines traits and types for loading daily price history.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::PriceSource;
pub use error::{DataError, Result};
pub use model::{closing_points, closing_prices, daily_returns, Quote};

// ============================================================================
// Tests
// ============================================================================
