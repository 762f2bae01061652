//! Opt-in maximal-window post-filter.
//!
//! A separate transformation on top of per-anchor detection: it drops every
//! window whose record run is a sub-run of a window already emitted for an
//! earlier anchor. Per-anchor detection itself is unchanged; callers that want
//! the full overlapping output use [`super::detect_patterns`].

use tracing::debug;

use crate::error::AnalyzeResult;
use crate::parser::EventRecord;

use super::sliding::{anchored_runs, sort_by_time, to_window};
use super::validate_min_sequence_length;
use super::window::PatternWindow;

/// Detect windows, keeping only those not contained in an earlier one.
///
/// Run ends never decrease across anchors, so a run is contained in an
/// earlier emitted run exactly when it ends no later than the furthest end
/// emitted so far.
pub fn detect_maximal_patterns(
    records: &[EventRecord],
    time_window_ms: i64,
    min_sequence_length: usize,
) -> AnalyzeResult<Vec<PatternWindow>> {
    validate_min_sequence_length(min_sequence_length)?;

    let sorted = sort_by_time(records);
    let mut covered_to = 0usize;
    let mut suppressed = 0usize;

    let windows: Vec<PatternWindow> = anchored_runs(&sorted, time_window_ms)
        .filter(|run| run.len() >= min_sequence_length)
        .filter(|run| {
            if run.end > covered_to {
                covered_to = run.end;
                true
            } else {
                suppressed += 1;
                false
            }
        })
        .map(|run| to_window(&sorted, run))
        .collect();

    debug!(
        records = sorted.len(),
        windows = windows.len(),
        suppressed,
        "detect: maximal-window filter applied"
    );

    Ok(windows)
}
