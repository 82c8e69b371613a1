//! Price source trait definition.

use crate::error::Result;
use crate::model::Quote;

/// Trait for sources of daily price history.
///
/// Implementations return quotes sorted by ascending date with no
/// duplicate dates.
pub trait PriceSource: Send + Sync {
    /// Source name, used in log lines.
    fn name(&self) -> &str;

    /// Load the full history.
    fn load(&self) -> Result<Vec<Quote>>;
}
