//! Detect module — temporal pattern windows over parsed event records.

pub mod maximal;
pub mod sliding;
pub mod window;

pub use maximal::detect_maximal_patterns;
pub use sliding::detect_patterns;
pub use window::PatternWindow;

use crate::error::{AnalyzeError, AnalyzeResult};
use crate::parser::EventRecord;

pub const DEFAULT_MIN_SEQUENCE_LENGTH: usize = 2;

/// Detection parameters as carried through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectOptions {
    /// Maximum offset from the anchor, inclusive. May be zero or negative.
    pub time_window_ms: i64,
    pub min_sequence_length: usize,
    /// Apply the maximal-window post-filter.
    pub maximal_only: bool,
}

impl DetectOptions {
    pub fn new(time_window_ms: i64) -> Self {
        Self {
            time_window_ms,
            min_sequence_length: DEFAULT_MIN_SEQUENCE_LENGTH,
            maximal_only: false,
        }
    }

    pub fn with_min_sequence_length(mut self, min_sequence_length: usize) -> Self {
        self.min_sequence_length = min_sequence_length;
        self
    }

    pub fn maximal_only(mut self, maximal_only: bool) -> Self {
        self.maximal_only = maximal_only;
        self
    }

    pub fn validate(&self) -> AnalyzeResult<()> {
        validate_min_sequence_length(self.min_sequence_length)
    }

    /// Run detection over `records` with these options.
    pub fn detect(&self, records: &[EventRecord]) -> AnalyzeResult<Vec<PatternWindow>> {
        if self.maximal_only {
            detect_maximal_patterns(records, self.time_window_ms, self.min_sequence_length)
        } else {
            detect_patterns(records, self.time_window_ms, self.min_sequence_length)
        }
    }
}

pub(crate) fn validate_min_sequence_length(min_sequence_length: usize) -> AnalyzeResult<()> {
    if min_sequence_length == 0 {
        return Err(AnalyzeError::InvalidMinSequenceLength(min_sequence_length));
    }
    Ok(())
}

/// Parse a window duration given as text (config values, env vars).
pub fn parse_time_window(raw: &str) -> AnalyzeResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| AnalyzeError::InvalidTimeWindow(format!("{:?}: {}", raw, e)))
}
