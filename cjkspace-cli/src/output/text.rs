//! Plain text report formatter

use super::{Detection, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one `path: encoding` line per input
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_detection(&mut self, detection: &Detection) -> Result<()> {
        writeln!(self.writer, "{}: {}", detection.path, detection.encoding)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
