//! Log line parsing
//!
//! Turns raw log text into an ordered sequence of [`EventRecord`]s.
//!
//! # Architecture
//!
//! - `traits.rs`: the [`LineParser`] seam
//! - `line.rs`: the `<timestamp> <EVENT> [detail]` line format
//! - `timestamp.rs`: strict ISO-8601 UTC timestamp parsing
//! - `model.rs`: event record and parse error types
//!
//! Malformed lines are expected noise: they are dropped (traced at `trace`
//! level) and never abort processing of the rest of the log. Lines dropped for
//! exceeding the size limit are well-formed data, so those are logged at `warn`.

pub mod traits;
pub mod line;
pub mod timestamp;
pub mod model;

// Re-export commonly used types
pub use traits::LineParser;
pub use line::EventLineParser;
pub use model::{EventRecord, ParseError};
pub use timestamp::parse_timestamp;

// Constants
pub const MAX_LINE_SIZE: usize = 1_048_576; // 1MB, default for EventLineParser

/// Parse a whole log blob with the default [`EventLineParser`].
pub fn parse_log_entries(content: &str) -> Vec<EventRecord> {
    parse_lines_with(&EventLineParser::default(), content)
}

/// Parse a whole log blob with any [`LineParser`].
///
/// Lines are split on `\n`; blank and whitespace-only lines are skipped, and a
/// single trailing `\r` is stripped. Records come back in line order, unsorted.
pub fn parse_lines_with<P: LineParser + ?Sized>(parser: &P, content: &str) -> Vec<EventRecord> {
    let mut records = Vec::new();
    let mut dropped = 0usize;

    for (idx, line) in content.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line = line.strip_suffix('\r').unwrap_or(line);

        match parser.parse(line) {
            Ok(record) => records.push(record),
            Err(e @ ParseError::LineTooLarge(..)) => {
                dropped += 1;
                tracing::warn!(line = idx + 1, error = %e, "parser: dropping oversized line");
            }
            Err(e) => {
                dropped += 1;
                tracing::trace!(line = idx + 1, error = %e, "parser: dropping malformed line");
            }
        }
    }

    tracing::debug!(parsed = records.len(), dropped, "parser: log content parsed");
    records
}
