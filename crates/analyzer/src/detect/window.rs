use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// One time-bounded run of events anchored at its first record.
///
/// Windows are plain values: overlapping windows over the same records are
/// distinct results and are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternWindow {
    pub events: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl PatternWindow {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Exact span between the first and last event.
    pub fn span(&self) -> TimeDelta {
        self.end_time - self.start_time
    }

    /// [`Self::span`] truncated to whole milliseconds, for display.
    pub fn duration_ms(&self) -> i64 {
        self.span().num_milliseconds()
    }
}
