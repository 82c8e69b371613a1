//! Delimited price-history files.
//!
//! Reads the export format of common market-data downloaders: one header
//! row, a date column and a close column, optionally open/high/low/volume.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use data_api::LoadConfig;
use data_spi::{DataError, PriceSource, Quote, Result};
use tracing::debug;

const OPEN_COLUMN: &str = "Open";
const HIGH_COLUMN: &str = "High";
const LOW_COLUMN: &str = "Low";
const VOLUME_COLUMN: &str = "Volume";

/// Parse the leading `YYYY-MM-DD` of a date cell.
///
/// Cells such as `2024-01-02 00:00:00-05:00` keep only the calendar date
/// as printed, so no time-zone conversion can move a row to another day.
pub fn parse_date_cell(cell: &str) -> Result<NaiveDate> {
    let cell = cell.trim();
    let head = cell.get(..10).unwrap_or(cell);
    NaiveDate::parse_from_str(head, "%Y-%m-%d")
        .map_err(|e| DataError::InvalidDate(format!("'{}': {}", cell, e)))
}

/// Price source backed by a CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
    config: LoadConfig,
}

impl CsvPriceSource {
    /// Read `path` with the default `Date`/`Close` columns.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: LoadConfig::default(),
        }
    }

    /// Read `path` with a custom layout.
    pub fn with_config(path: impl Into<PathBuf>, config: LoadConfig) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &LoadConfig {
        &self.config
    }

    /// Parse quotes from any reader using `config`.
    pub fn read_from<R: Read>(reader: R, config: &LoadConfig) -> Result<Vec<Quote>> {
        config.validate()?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| DataError::ParseError(e.to_string()))?
            .clone();
        let find = |name: &str| headers.iter().position(|h| h == name);
        let date_idx = find(&config.date_column)
            .ok_or_else(|| DataError::MissingColumn(config.date_column.clone()))?;
        let close_idx = find(&config.close_column)
            .ok_or_else(|| DataError::MissingColumn(config.close_column.clone()))?;
        let open_idx = find(OPEN_COLUMN);
        let high_idx = find(HIGH_COLUMN);
        let low_idx = find(LOW_COLUMN);
        let volume_idx = find(VOLUME_COLUMN);

        let mut quotes = Vec::new();
        for (row, result) in reader.records().enumerate() {
            // header is line 1
            let line = row + 2;
            let record = result.map_err(|e| DataError::ParseError(e.to_string()))?;

            let date_cell = record.get(date_idx).unwrap_or_default();
            let date = parse_date_cell(date_cell)
                .map_err(|e| DataError::InvalidDate(format!("line {}: {}", line, inner(e))))?;

            let close_cell = record.get(close_idx).unwrap_or_default();
            let close = close_cell
                .parse::<f64>()
                .ok()
                .filter(|c| c.is_finite())
                .ok_or_else(|| {
                    DataError::ParseError(format!("line {}: invalid close '{}'", line, close_cell))
                })?;

            let optional = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i))
                    .and_then(|cell| cell.parse::<f64>().ok())
            };
            quotes.push(Quote {
                date,
                open: optional(open_idx),
                high: optional(high_idx),
                low: optional(low_idx),
                close,
                volume: volume_idx
                    .and_then(|i| record.get(i))
                    .and_then(|cell| cell.parse::<u64>().ok()),
            });
        }

        if quotes.is_empty() {
            return Err(DataError::NoData);
        }

        quotes.sort_by_key(|q| q.date);
        if let Some(pair) = quotes.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(DataError::ParseError(format!(
                "duplicate date {}",
                pair[0].date_string()
            )));
        }
        Ok(quotes)
    }
}

fn inner(err: DataError) -> String {
    match err {
        DataError::InvalidDate(msg) => msg,
        other => other.to_string(),
    }
}

impl PriceSource for CsvPriceSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Vec<Quote>> {
        let file = File::open(&self.path)
            .map_err(|e| DataError::Io(format!("{}: {}", self.path.display(), e)))?;
        let quotes = Self::read_from(BufReader::new(file), &self.config)?;
        debug!(
            path = %self.path.display(),
            rows = quotes.len(),
            "loaded price history"
        );
        Ok(quotes)
    }
}
