//! Headline source trait definition.

use crate::model::Headline;

/// Lookup service for news headlines published on a given day.
///
/// This is the boundary to the news-enrichment collaborator: the engine only
/// hands it `YYYY-MM-DD` keys and never interprets the results.
pub trait HeadlineSource: Send + Sync {
    /// Source name, used in log lines.
    fn name(&self) -> &str;

    /// Headlines matching `query` published on `date` (`YYYY-MM-DD`).
    ///
    /// An empty vector means nothing was found. Implementations that talk to
    /// remote services are expected to map transport failures to an empty
    /// result rather than abort a whole enrichment run.
    fn headlines(&self, query: &str, date: &str) -> Vec<Headline>;
}
