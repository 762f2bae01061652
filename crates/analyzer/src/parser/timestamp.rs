//! Strict ISO-8601 UTC timestamps: `YYYY-MM-DDTHH:MM:SS.mmmZ` and nothing else.
//!
//! No lenient date parsing here: missing milliseconds, numeric offsets and
//! trailing characters are all rejected, as are impossible calendar dates.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use super::model::ParseError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
pub const TIMESTAMP_LEN: usize = 24;

/// Parse a timestamp token into a UTC instant with millisecond precision.
pub fn parse_timestamp(token: &str) -> Result<DateTime<Utc>, ParseError> {
    if !has_timestamp_shape(token.as_bytes()) {
        return Err(ParseError::InvalidTimestamp(token.to_string()));
    }

    let naive = NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .map_err(|e| ParseError::InvalidTimestamp(format!("{}: {}", token, e)))?;

    // chrono represents `:60` as a leap second; a log timestamp never should
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(ParseError::InvalidTimestamp(token.to_string()));
    }

    Ok(naive.and_utc())
}

/// Byte-level shape check, no allocation.
fn has_timestamp_shape(token: &[u8]) -> bool {
    if token.len() != TIMESTAMP_LEN {
        return false;
    }

    token.iter().enumerate().all(|(i, &c)| match i {
        4 | 7 => c == b'-',
        10 => c == b'T',
        13 | 16 => c == b':',
        19 => c == b'.',
        23 => c == b'Z',
        _ => c.is_ascii_digit(),
    })
}
