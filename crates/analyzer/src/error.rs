use thiserror::Error;

/// Caller contract violations for pattern detection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Invalid min_sequence_length: {0} (must be >= 1)")]
    InvalidMinSequenceLength(usize),

    #[error("Invalid time window: {0}")]
    InvalidTimeWindow(String),
}

// Convenience type alias
pub type AnalyzeResult<T> = Result<T, AnalyzeError>;
