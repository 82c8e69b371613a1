//! Price Data Core
//!
//! Implementations for price-history sources and headline archives.

pub mod csv_source;
pub mod headline_archive;

pub use csv_source::{parse_date_cell, CsvPriceSource};
pub use headline_archive::JsonHeadlineArchive;
