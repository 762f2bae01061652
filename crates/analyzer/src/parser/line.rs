//! Event line format: `<timestamp> <EVENT> [free-text detail]`.
//!
//! ```text
//! 2024-01-15T14:32:15.123Z LOGIN User logged in
//! └── timestamp ─────────┘ └tok┘ └── detail ──┘
//! ```

use std::sync::LazyLock;

use grep_matcher::{Captures, Matcher};
use grep_regex::{RegexMatcher, RegexMatcherBuilder};

use super::timestamp::parse_timestamp;
use super::traits::{EventRecord, LineParser, ParseError};
use super::MAX_LINE_SIZE;

/// Anchored line format. The timestamp group is only shape-matched here;
/// calendar validation happens in [`parse_timestamp`].
pub const EVENT_LINE_PATTERN: &str =
    r"^(?P<ts>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z)\s+(?P<event>\S+)(?:\s+(?P<detail>.*))?$";

static EVENT_LINE: LazyLock<LineMatcher> = LazyLock::new(LineMatcher::compile);

/// Compiled matcher plus resolved capture-group indices.
struct LineMatcher {
    matcher: RegexMatcher,
    ts: usize,
    event: usize,
    detail: usize,
}

impl LineMatcher {
    fn compile() -> Self {
        let matcher = RegexMatcherBuilder::new()
            .multi_line(false)
            .build(EVENT_LINE_PATTERN)
            .expect("event line pattern is a valid regex");

        let index = |name: &str| {
            matcher
                .capture_index(name)
                .expect("event line pattern declares the named group")
        };
        let (ts, event, detail) = (index("ts"), index("event"), index("detail"));

        Self {
            matcher,
            ts,
            event,
            detail,
        }
    }
}

/// Parser for timestamped event lines.
#[derive(Debug, Clone, Copy)]
pub struct EventLineParser {
    max_line_size: usize,
}

impl Default for EventLineParser {
    fn default() -> Self {
        Self {
            max_line_size: MAX_LINE_SIZE,
        }
    }
}

impl EventLineParser {
    /// Lines longer than `max_line_size` bytes are rejected with
    /// [`ParseError::LineTooLarge`]. `usize::MAX` disables the limit.
    pub fn with_max_line_size(max_line_size: usize) -> Self {
        Self { max_line_size }
    }

    pub fn max_line_size(&self) -> usize {
        self.max_line_size
    }
}

impl LineParser for EventLineParser {
    fn parse(&self, line: &str) -> Result<EventRecord, ParseError> {
        if line.len() > self.max_line_size {
            return Err(ParseError::LineTooLarge(line.len(), self.max_line_size));
        }

        let line_matcher = &*EVENT_LINE;
        let haystack = line.as_bytes();

        let mut caps = line_matcher
            .matcher
            .new_captures()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let matched = line_matcher
            .matcher
            .captures(haystack, &mut caps)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        if !matched {
            return Err(ParseError::InvalidFormat(
                "expected '<timestamp> <EVENT> [detail]'".into(),
            ));
        }

        // Group offsets always fall on char boundaries of a &str haystack
        let group = |idx: usize| caps.get(idx).map(|m| &line[m.start()..m.end()]);

        let ts = group(line_matcher.ts)
            .ok_or_else(|| ParseError::InvalidFormat("missing timestamp".into()))?;
        let token = group(line_matcher.event)
            .ok_or_else(|| ParseError::InvalidFormat("missing event token".into()))?;
        let detail = group(line_matcher.detail);

        let timestamp = parse_timestamp(ts)?;
        Ok(EventRecord::from_parts(timestamp, token, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<EventRecord, ParseError> {
        EventLineParser::default().parse(line)
    }

    #[test]
    fn test_event_with_detail() {
        let record = parse("2024-01-15T14:32:15.123Z LOGIN User logged in").unwrap();
        assert_eq!(record.event, "LOGIN User logged in");
        assert_eq!(
            record.timestamp.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-01-15T14:32:15.123Z"
        );
    }

    #[test]
    fn test_event_without_detail() {
        let record = parse("2024-01-15T14:32:15.123Z HEARTBEAT").unwrap();
        assert_eq!(record.event, "HEARTBEAT");
    }

    #[test]
    fn test_trailing_whitespace_after_token_is_not_detail() {
        let record = parse("2024-01-15T14:32:15.123Z HEARTBEAT   ").unwrap();
        assert_eq!(record.event, "HEARTBEAT");
    }

    #[test]
    fn test_detail_keeps_inner_spacing() {
        let record = parse("2024-01-15T14:32:15.123Z\tERROR   disk  full on /dev/sda1").unwrap();
        assert_eq!(record.event, "ERROR disk  full on /dev/sda1");
    }

    #[test]
    fn test_timestamp_only_is_rejected() {
        assert!(matches!(
            parse("2024-01-15T14:32:15.123Z"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(parse("2024-01-15T14:32:15.123Z   ").is_err());
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        assert!(parse("not-a-timestamp FOO bar").is_err());
        assert!(parse("2024-01-15T14:32:15Z LOGIN User logged in").is_err());
        assert!(parse("2024-01-15T14:32:15.123+00:00 LOGIN x").is_err());
        assert!(parse("2024-01-15T14:32:15.123Zextra LOGIN x").is_err());
    }

    #[test]
    fn test_leading_whitespace_is_rejected() {
        assert!(parse("  2024-01-15T14:32:15.123Z LOGIN x").is_err());
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        assert!(matches!(
            parse("2024-02-30T10:00:00.000Z LOGIN x"),
            Err(ParseError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_unicode_detail() {
        let record = parse("2024-01-15T14:32:15.123Z NOTE café ✓").unwrap();
        assert_eq!(record.event, "NOTE café ✓");
    }

    #[test]
    fn test_trailing_whitespace_after_detail_is_kept() {
        let record = parse("2024-01-15T14:32:15.123Z LOGIN User logged in   ").unwrap();
        assert_eq!(record.event, "LOGIN User logged in   ");

        let record = parse("2024-01-15T14:32:15.123Z LOGIN User logged in\t").unwrap();
        assert_eq!(record.event, "LOGIN User logged in\t");
    }

    #[test]
    fn test_line_too_large() {
        let line = format!("2024-01-15T14:32:15.123Z BIG {}", "x".repeat(MAX_LINE_SIZE));
        assert!(matches!(parse(&line), Err(ParseError::LineTooLarge(_, _))));
    }

    #[test]
    fn test_configurable_line_limit() {
        let line = "2024-01-15T14:32:15.123Z LOGIN User logged in";

        let strict = EventLineParser::with_max_line_size(10);
        assert_eq!(
            strict.parse(line),
            Err(ParseError::LineTooLarge(line.len(), 10))
        );

        let exact = EventLineParser::with_max_line_size(line.len());
        assert_eq!(exact.parse(line).unwrap().event, "LOGIN User logged in");

        let big = format!("2024-01-15T14:32:15.123Z BIG {}", "x".repeat(MAX_LINE_SIZE));
        let unlimited = EventLineParser::with_max_line_size(usize::MAX);
        assert_eq!(unlimited.parse(&big).unwrap().event.len(), MAX_LINE_SIZE + 4);
    }
}
