//! Result bundle returned by the orchestrator.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{AnomalyRecord, ExtremeAnomaly, RunAnomaly, SingleDayAnomaly, TrendAnomaly};
use super::ISO_DATE_FORMAT;

/// Identifies one of the four detectors and its bundle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// Single-day return shocks
    Mad,
    /// Multi-day trend shifts
    Rolling,
    /// Extreme compounded moves
    Extreme,
    /// Persistent directional runs
    Persistent,
}

impl DetectorKind {
    /// All detectors in bundle order.
    pub const ALL: [DetectorKind; 4] = [
        DetectorKind::Mad,
        DetectorKind::Rolling,
        DetectorKind::Extreme,
        DetectorKind::Persistent,
    ];

    /// Bundle key.
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectorKind::Mad => "mad",
            DetectorKind::Rolling => "rolling",
            DetectorKind::Extreme => "extreme",
            DetectorKind::Persistent => "persistent",
        }
    }
}

impl std::fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-detector anomaly collections, each in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultBundle {
    pub mad: Vec<SingleDayAnomaly>,
    pub rolling: Vec<TrendAnomaly>,
    pub extreme: Vec<ExtremeAnomaly>,
    pub persistent: Vec<RunAnomaly>,
}

impl ResultBundle {
    /// Records of one detector, wrapped in the common enum.
    pub fn records(&self, kind: DetectorKind) -> Vec<AnomalyRecord> {
        match kind {
            DetectorKind::Mad => self.mad.iter().cloned().map(Into::into).collect(),
            DetectorKind::Rolling => self.rolling.iter().cloned().map(Into::into).collect(),
            DetectorKind::Extreme => self.extreme.iter().cloned().map(Into::into).collect(),
            DetectorKind::Persistent => self.persistent.iter().cloned().map(Into::into).collect(),
        }
    }

    /// Number of records produced by one detector.
    pub fn count(&self, kind: DetectorKind) -> usize {
        match kind {
            DetectorKind::Mad => self.mad.len(),
            DetectorKind::Rolling => self.rolling.len(),
            DetectorKind::Extreme => self.extreme.len(),
            DetectorKind::Persistent => self.persistent.len(),
        }
    }

    /// `(kind, count)` for every detector, in bundle order.
    pub fn counts(&self) -> Vec<(DetectorKind, usize)> {
        DetectorKind::ALL
            .iter()
            .map(|&kind| (kind, self.count(kind)))
            .collect()
    }

    /// Total number of records across detectors.
    pub fn len(&self) -> usize {
        DetectorKind::ALL.iter().map(|&kind| self.count(kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Union of the lookup dates of every record, ascending.
    pub fn flagged_dates(&self) -> BTreeSet<NaiveDate> {
        DetectorKind::ALL
            .iter()
            .flat_map(|&kind| self.records(kind))
            .map(|record| record.primary_date())
            .collect()
    }

    /// `flagged_dates` formatted as `YYYY-MM-DD`, the news lookup query set.
    pub fn query_keys(&self) -> Vec<String> {
        self.flagged_dates()
            .iter()
            .map(|d| d.format(ISO_DATE_FORMAT).to_string())
            .collect()
    }
}
