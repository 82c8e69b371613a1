//! Utility functions for working with quotes and prices.

use chrono::NaiveDate;

use super::Quote;

/// `(date, close)` pairs, ready to build a price series.
pub fn closing_points(quotes: &[Quote]) -> Vec<(NaiveDate, f64)> {
    quotes.iter().map(|q| (q.date, q.close)).collect()
}

/// Extract closing prices from quotes.
pub fn closing_prices(quotes: &[Quote]) -> Vec<f64> {
    quotes.iter().map(|q| q.close).collect()
}

/// Simple daily returns, `p[i] / p[i - 1] - 1`.
pub fn daily_returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }

    prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}
