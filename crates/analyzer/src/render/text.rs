use std::io::Write;

use chrono::SecondsFormat;

use super::{PatternSink, RenderError};
use crate::detect::PatternWindow;

/// Human-readable listing, one block per window:
///
/// ```text
/// Pattern 1: 2024-01-15T14:32:15.123Z -> 2024-01-15T14:32:19.789Z (3 events, 4666ms)
///   - LOGIN User logged in
///   - NAVIGATE User navigated to dashboard
///   - CLICK User clicked export button
/// ```
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PatternSink for TextSink<W> {
    fn emit(&mut self, windows: &[PatternWindow]) -> Result<(), RenderError> {
        if windows.is_empty() {
            writeln!(self.writer, "No patterns found")?;
            self.writer.flush()?;
            return Ok(());
        }

        for (idx, window) in windows.iter().enumerate() {
            writeln!(
                self.writer,
                "Pattern {}: {} -> {} ({} events, {}ms)",
                idx + 1,
                window.start_time.to_rfc3339_opts(SecondsFormat::Millis, true),
                window.end_time.to_rfc3339_opts(SecondsFormat::Millis, true),
                window.len(),
                window.duration_ms(),
            )?;
            for event in &window.events {
                writeln!(self.writer, "  - {}", event)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
