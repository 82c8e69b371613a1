//! Data models for daily price history.

mod quote;
mod utils;

pub use quote::Quote;
pub use utils::{closing_points, closing_prices, daily_returns};
