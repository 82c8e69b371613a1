//! Offline headline archive.
//!
//! A JSON document mapping `YYYY-MM-DD` to a list of headline titles, the
//! same shape an enrichment run writes out.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anomaly_spi::{Headline, HeadlineSource};
use data_spi::{DataError, Result};
use tracing::debug;

/// Entry written for dates that had no headlines; never served as a title.
const PLACEHOLDER: &str = "No major headlines found.";

/// Headline source answering from a stored `{date: [titles]}` map.
///
/// The query string is ignored: an archive is built for one subject.
#[derive(Debug, Clone, Default)]
pub struct JsonHeadlineArchive {
    entries: BTreeMap<String, Vec<String>>,
}

impl JsonHeadlineArchive {
    pub fn new(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }

    /// Load an archive file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DataError::Io(format!("{}: {}", path.display(), e)))?;
        let archive = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), dates = archive.len(), "loaded headline archive");
        Ok(archive)
    }

    /// Parse an archive document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_reader(reader).map_err(|e| DataError::ParseError(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dates present in the archive, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl HeadlineSource for JsonHeadlineArchive {
    fn name(&self) -> &str {
        "json-archive"
    }

    fn headlines(&self, _query: &str, date: &str) -> Vec<Headline> {
        self.entries
            .get(date)
            .map(|titles| {
                titles
                    .iter()
                    .filter(|t| t.as_str() != PLACEHOLDER && !t.trim().is_empty())
                    .map(|t| Headline::titled(t.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
