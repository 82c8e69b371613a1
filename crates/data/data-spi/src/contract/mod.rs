//! Contracts implemented by price-history sources.

mod price_source;

pub use price_source::PriceSource;
