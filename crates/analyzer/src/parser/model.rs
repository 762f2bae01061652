use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One timestamped occurrence parsed from a log line.
///
/// `event` carries the event token, followed by the free-text detail (joined
/// with a single space) when the line had one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Serializes as ISO-8601 (`2024-01-15T14:32:15.123Z`)
    pub timestamp: DateTime<Utc>,
    pub event: String,
}

impl EventRecord {
    pub fn new(timestamp: DateTime<Utc>, event: impl Into<String>) -> Self {
        Self {
            timestamp,
            event: event.into(),
        }
    }

    /// Build the event string from a token and an optional detail.
    /// An empty detail is treated as absent.
    pub fn from_parts(timestamp: DateTime<Utc>, token: &str, detail: Option<&str>) -> Self {
        let event = match detail.filter(|d| !d.is_empty()) {
            Some(detail) => format!("{} {}", token, detail),
            None => token.to_string(),
        };
        Self { timestamp, event }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Line too large: {0} bytes (max: {1} bytes)")]
    LineTooLarge(usize, usize),
}
