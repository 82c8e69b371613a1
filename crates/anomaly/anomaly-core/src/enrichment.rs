//! News enrichment of flagged dates.
//!
//! The engine hands the lookup dates of a [`ResultBundle`] to a
//! [`HeadlineSource`] and keeps the titles it returns, keyed by ISO date.

use std::collections::BTreeMap;

use anomaly_spi::{HeadlineSource, ResultBundle};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Entry stored for a date whose lookup returned nothing.
pub const NO_HEADLINES_PLACEHOLDER: &str = "No major headlines found.";

/// Headline titles per `YYYY-MM-DD` date, in ascending date order.
///
/// An empty entry means the date has not been looked up yet. Once looked
/// up, an entry always holds at least one title, or the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeadlineDigest {
    entries: BTreeMap<String, Vec<String>>,
}

impl HeadlineDigest {
    /// Digest with an empty, pending entry for each key.
    pub fn with_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: keys.into_iter().map(|k| (k.into(), Vec::new())).collect(),
        }
    }

    /// Digest with a pending entry for each lookup date of `bundle`.
    pub fn for_bundle(bundle: &ResultBundle) -> Self {
        Self::with_keys(bundle.query_keys())
    }

    /// Dates still waiting for a lookup.
    pub fn pending(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, titles)| titles.is_empty())
            .map(|(date, _)| date.as_str())
            .collect()
    }

    /// Look up every pending date and store the result.
    ///
    /// Entries that already hold titles are never re-queried. Returns the
    /// number of dates looked up.
    pub fn fill_missing(&mut self, query: &str, source: &dyn HeadlineSource) -> usize {
        let mut filled = 0;
        for (date, titles) in self.entries.iter_mut().filter(|(_, t)| t.is_empty()) {
            let found: Vec<String> = source
                .headlines(query, date)
                .into_iter()
                .map(|h| h.title)
                .collect();
            debug!(source = source.name(), date = %date, headlines = found.len(), "headline lookup");
            *titles = if found.is_empty() {
                vec![NO_HEADLINES_PLACEHOLDER.to_string()]
            } else {
                found
            };
            filled += 1;
        }
        info!(source = source.name(), filled, total = self.entries.len(), "headline enrichment complete");
        filled
    }

    pub fn get(&self, date: &str) -> Option<&[String]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(d, t)| (d.as_str(), t.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.entries
    }
}

impl From<BTreeMap<String, Vec<String>>> for HeadlineDigest {
    fn from(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

/// Look up headlines for every flagged date of `bundle`.
pub fn collect_headlines(
    bundle: &ResultBundle,
    query: &str,
    source: &dyn HeadlineSource,
) -> HeadlineDigest {
    let mut digest = HeadlineDigest::for_bundle(bundle);
    digest.fill_missing(query, source);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_spi::{Headline, SingleDayAnomaly};
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct MockSource {
        known: BTreeMap<&'static str, Vec<&'static str>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn new(known: &[(&'static str, &[&'static str])]) -> Self {
            Self {
                known: known.iter().map(|(d, t)| (*d, t.to_vec())).collect(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl HeadlineSource for MockSource {
        fn name(&self) -> &str {
            "mock"
        }

        fn headlines(&self, query: &str, date: &str) -> Vec<Headline> {
            assert_eq!(query, "Apple Inc");
            self.calls.lock().unwrap().push(date.to_string());
            self.known
                .get(date)
                .map(|titles| titles.iter().map(|t| Headline::titled(*t)).collect())
                .unwrap_or_default()
        }
    }

    fn single(date: &str) -> SingleDayAnomaly {
        SingleDayAnomaly {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close: 100.0,
            daily_return: 0.1,
            z_score: 5.0,
        }
    }

    #[test]
    fn test_collect_uses_bundle_dates() {
        let bundle = ResultBundle {
            mad: vec![single("2024-04-18"), single("2024-01-25")],
            ..Default::default()
        };
        let source = MockSource::new(&[("2024-01-25", &["Earnings beat", "Guidance raised"])]);

        let digest = collect_headlines(&bundle, "Apple Inc", &source);

        assert_eq!(digest.len(), 2);
        assert_eq!(
            digest.get("2024-01-25").unwrap(),
            &["Earnings beat".to_string(), "Guidance raised".to_string()]
        );
        assert_eq!(
            digest.get("2024-04-18").unwrap(),
            &[NO_HEADLINES_PLACEHOLDER.to_string()]
        );
        assert_eq!(source.calls(), vec!["2024-01-25", "2024-04-18"]);
    }

    #[test]
    fn test_fill_missing_skips_filled_entries() {
        let mut entries = BTreeMap::new();
        entries.insert("2024-01-25".to_string(), vec!["Already here".to_string()]);
        entries.insert("2024-02-12".to_string(), Vec::new());
        let mut digest = HeadlineDigest::from(entries);
        assert_eq!(digest.pending(), vec!["2024-02-12"]);

        let source = MockSource::new(&[("2024-02-12", &["Split announced"])]);
        let filled = digest.fill_missing("Apple Inc", &source);

        assert_eq!(filled, 1);
        assert_eq!(source.calls(), vec!["2024-02-12"]);
        assert_eq!(digest.get("2024-01-25").unwrap(), &["Already here".to_string()]);
        assert!(digest.pending().is_empty());
    }

    #[test]
    fn test_empty_bundle_gives_empty_digest() {
        let source = MockSource::new(&[]);
        let digest = collect_headlines(&ResultBundle::default(), "Apple Inc", &source);
        assert!(digest.is_empty());
        assert!(source.calls().is_empty());
    }

    #[test]
    fn test_digest_serializes_as_plain_map() {
        let digest = HeadlineDigest::with_keys(["2024-01-25"]);
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, r#"{"2024-01-25":[]}"#);
        let back: HeadlineDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
    }
}
