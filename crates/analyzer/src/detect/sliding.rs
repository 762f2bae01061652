//! Anchor-at-every-index sliding window detection.
//!
//! Every record of the time-sorted sequence is tried as an anchor exactly
//! once. The run for anchor `i` extends forward while records stay within
//! `time_window_ms` of the anchor and stops at the first record outside it;
//! sorted input guarantees nothing later can re-enter. Each run that reaches
//! `min_sequence_length` becomes a [`PatternWindow`], so a dense cluster also
//! yields its qualifying suffix windows. O(n²) when everything is in range.

use std::ops::Range;

use chrono::TimeDelta;
use tracing::debug;

use crate::error::AnalyzeResult;
use crate::parser::EventRecord;

use super::validate_min_sequence_length;
use super::window::PatternWindow;

/// Stable ascending sort by timestamp. Equal timestamps keep input order.
pub(crate) fn sort_by_time(records: &[EventRecord]) -> Vec<&EventRecord> {
    let mut sorted: Vec<&EventRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.timestamp);
    sorted
}

/// The window as an exact duration. Values too large for `TimeDelta` saturate:
/// a huge positive window reaches every later record, a huge negative one none.
pub(crate) fn window_limit(time_window_ms: i64) -> TimeDelta {
    TimeDelta::try_milliseconds(time_window_ms).unwrap_or(if time_window_ms > 0 {
        TimeDelta::MAX
    } else {
        TimeDelta::MIN
    })
}

/// One run per anchor, in anchor order, as index ranges into `sorted`.
///
/// The anchor is always part of its own run, so every range is non-empty.
/// Run ends never decrease from one anchor to the next.
pub(crate) fn anchored_runs<'a>(
    sorted: &'a [&'a EventRecord],
    time_window_ms: i64,
) -> impl Iterator<Item = Range<usize>> + 'a {
    let limit = window_limit(time_window_ms);
    (0..sorted.len()).map(move |anchor| {
        let origin = sorted[anchor].timestamp;
        let mut end = anchor + 1;
        while end < sorted.len() && sorted[end].timestamp - origin <= limit {
            end += 1;
        }
        anchor..end
    })
}

pub(crate) fn to_window(sorted: &[&EventRecord], run: Range<usize>) -> PatternWindow {
    let records = &sorted[run];
    PatternWindow {
        events: records.iter().map(|r| r.event.clone()).collect(),
        start_time: records[0].timestamp,
        end_time: records[records.len() - 1].timestamp,
    }
}

/// Detect every qualifying per-anchor window.
///
/// Input need not be sorted; it is always stable-sorted first. Fails only
/// when `min_sequence_length` is 0.
pub fn detect_patterns(
    records: &[EventRecord],
    time_window_ms: i64,
    min_sequence_length: usize,
) -> AnalyzeResult<Vec<PatternWindow>> {
    validate_min_sequence_length(min_sequence_length)?;

    let sorted = sort_by_time(records);
    let windows: Vec<PatternWindow> = anchored_runs(&sorted, time_window_ms)
        .filter(|run| run.len() >= min_sequence_length)
        .map(|run| to_window(&sorted, run))
        .collect();

    debug!(
        records = sorted.len(),
        time_window_ms,
        min_sequence_length,
        windows = windows.len(),
        "detect: per-anchor detection complete"
    );

    Ok(windows)
}
