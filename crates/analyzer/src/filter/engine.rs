use std::cell::Cell;

use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::parser::EventRecord;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid regex pattern: {0}")]
    InvalidRegex(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    Include,
    Exclude,
}

/// Counters over the lifetime of one filter. Single-threaded, like the run.
#[derive(Debug, Default)]
pub struct FilterStats {
    pub events_scanned: Cell<u64>,
    pub events_kept: Cell<u64>,
}

impl FilterStats {
    fn bump(counter: &Cell<u64>) {
        counter.set(counter.get() + 1);
    }
}

/// Regex filter over the `event` string of parsed records.
pub struct EventFilter {
    matcher: RegexMatcher,
    mode: FilterMode,
    stats: FilterStats,
}

impl EventFilter {
    pub fn new(pattern: &str, case_sensitive: bool, mode: FilterMode) -> Result<Self, FilterError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(!case_sensitive)
            .multi_line(false)
            .build(pattern)
            .map_err(|e| FilterError::InvalidRegex(e.to_string()))?;

        Ok(Self {
            matcher,
            mode,
            stats: FilterStats::default(),
        })
    }

    #[inline]
    pub fn should_include(&self, record: &EventRecord) -> bool {
        FilterStats::bump(&self.stats.events_scanned);

        let matches = self.matcher.is_match(record.event.as_bytes()).unwrap_or(false);

        let include = match self.mode {
            FilterMode::Include => matches,
            FilterMode::Exclude => !matches,
        };

        if include {
            FilterStats::bump(&self.stats.events_kept);
        }

        include
    }

    /// Keep the records that pass the filter, preserving their order.
    pub fn apply(&self, records: Vec<EventRecord>) -> Vec<EventRecord> {
        let kept: Vec<EventRecord> = records
            .into_iter()
            .filter(|r| self.should_include(r))
            .collect();

        let (scanned, kept_total) = self.stats();
        tracing::debug!(
            mode = ?self.mode,
            scanned,
            kept = kept_total,
            "filter: event filter applied"
        );
        kept
    }

    /// `(scanned, kept)` over the lifetime of this filter.
    pub fn stats(&self) -> (u64, u64) {
        (self.stats.events_scanned.get(), self.stats.events_kept.get())
    }
}
