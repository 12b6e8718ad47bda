//! JSON report formatter

use super::{Detection, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs detections as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    detections: Vec<Detection>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            detections: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_detection(&mut self, detection: &Detection) -> Result<()> {
        self.detections.push(detection.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.detections)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter.finish().unwrap();
        assert_eq!(String::from_utf8(formatter.writer).unwrap(), "[]\n");
    }

    #[test]
    fn test_records_in_order() {
        let mut formatter = JsonFormatter::new(Vec::new());
        formatter
            .format_detection(&Detection {
                path: "gbk.txt".to_string(),
                encoding: "GBK".to_string(),
                bytes: 4,
            })
            .unwrap();
        formatter.finish().unwrap();

        let value: serde_json::Value = serde_json::from_slice(&formatter.writer).unwrap();
        assert_eq!(value[0]["path"], "gbk.txt");
        assert_eq!(value[0]["encoding"], "GBK");
        assert_eq!(value[0]["bytes"], 4);
    }
}
