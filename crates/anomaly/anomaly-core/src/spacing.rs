//! Minimum spacing filter for clustered detections.

use chrono::NaiveDate;

/// Greedily keep dates at least `min_gap_days` calendar days after the last
/// kept one.
///
/// `dates` must be ascending. Returns the indices of the kept dates, so the
/// earlier of two close events always survives. A gap of zero or less keeps
/// everything.
pub fn enforce_min_spacing(dates: &[NaiveDate], min_gap_days: i64) -> Vec<usize> {
    let mut kept = Vec::with_capacity(dates.len());
    let mut last: Option<NaiveDate> = None;
    for (i, &date) in dates.iter().enumerate() {
        let far_enough = match last {
            None => true,
            Some(prev) => (date - prev).num_days() >= min_gap_days,
        };
        if far_enough {
            kept.push(i);
            last = Some(date);
        }
    }
    kept
}
