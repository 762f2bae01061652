use std::io::Write;

use super::{PatternSink, RenderError};
use crate::detect::PatternWindow;

/// Writes the window list as one JSON array.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> PatternSink for JsonSink<W> {
    fn emit(&mut self, windows: &[PatternWindow]) -> Result<(), RenderError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, windows)?;
        } else {
            serde_json::to_writer(&mut self.writer, windows)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
