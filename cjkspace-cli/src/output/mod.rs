//! Output handling module
//!
//! Spaced bytes go to stdout or a single output file; detection reports go
//! through an [`OutputFormatter`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `path: encoding` line per input
    Text,
    /// JSON array of detection records
    Json,
}

/// Encoding report for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Input path as given or resolved
    pub path: String,
    /// Encoding name, `binary` or `malformed`
    pub encoding: String,
    /// Input size in bytes
    pub bytes: u64,
}

/// Trait for report formatters
pub trait OutputFormatter {
    /// Format and output a single detection
    fn format_detection(&mut self, detection: &Detection) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for the requested format
pub fn formatter<'w, W: Write + 'w>(
    format: OutputFormat,
    writer: W,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}

/// Open the destination for spaced bytes: a file if given, stdout otherwise
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Detection {
        Detection {
            path: "notes.txt".to_string(),
            encoding: "UTF-8".to_string(),
            bytes: 12,
        }
    }

    #[test]
    fn test_formatter_dispatch() {
        let mut buffer = Vec::new();
        {
            let mut formatter = formatter(OutputFormat::Text, &mut buffer);
            formatter.format_detection(&sample()).unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "notes.txt: UTF-8\n");

        let mut buffer = Vec::new();
        {
            let mut formatter = formatter(OutputFormat::Json, &mut buffer);
            formatter.format_detection(&sample()).unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<Detection> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, vec![sample()]);
    }

    #[test]
    fn test_open_destination_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        {
            let mut destination = open_destination(Some(&path)).unwrap();
            destination.write_all("中文 abc".as_bytes()).unwrap();
            destination.flush().unwrap();
        }

        assert_eq!(std::fs::read(&path).unwrap(), "中文 abc".as_bytes());
    }

    #[test]
    fn test_open_destination_bad_path() {
        let result = open_destination(Some(Path::new("/nonexistent/dir/out.txt")));
        assert!(result.is_err());
    }
}
