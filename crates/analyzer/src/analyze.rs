//! Analyze — parse a log blob and detect pattern windows in one call.

use crate::detect::{detect_patterns, PatternWindow};
use crate::error::AnalyzeResult;
use crate::parser::parse_log_entries;

/// Parse `log_content` and return every per-anchor pattern window.
///
/// Malformed lines are dropped; an empty or fully malformed log yields an
/// empty list. Only `min_sequence_length == 0` is an error.
pub fn analyze_log_patterns(
    log_content: &str,
    time_window_ms: i64,
    min_sequence_length: usize,
) -> AnalyzeResult<Vec<PatternWindow>> {
    let records = parse_log_entries(log_content);
    detect_patterns(&records, time_window_ms, min_sequence_length)
}
