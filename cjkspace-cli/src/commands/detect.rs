//! Detect command implementation

use super::RunContext;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{formatter, Detection, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use cjkspace_core::config::resolve_fallback;
use cjkspace_core::encoding::detect_encoding_with_fallback;
use cjkspace_core::is_text;
use std::io::Write;
use std::path::Path;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Codepage label reported for input that is neither UTF-8 nor BOM-marked
    #[arg(long, value_name = "LABEL")]
    pub fallback_encoding: Option<String>,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute<W: Write>(&self, context: &RunContext, writer: W) -> Result<()> {
        let label = self
            .fallback_encoding
            .as_deref()
            .unwrap_or(context.config.encoding.fallback.as_str());
        let fallback = resolve_fallback(label)
            .with_context(|| format!("Invalid fallback encoding: {label}"))?;

        let files = resolve_patterns(&self.input)?;
        let mut formatter = formatter(self.format, writer);

        for path in &files {
            let bytes = FileReader::read_bytes(path)?;
            formatter.format_detection(&describe(path, &bytes, fallback))?;
        }

        formatter.finish()
    }
}

/// Classify one input's bytes
pub fn describe(
    path: &Path,
    bytes: &[u8],
    fallback: &'static cjkspace_core::encoding::LegacyEncoding,
) -> Detection {
    let encoding = if !is_text(bytes) {
        "binary".to_string()
    } else {
        match detect_encoding_with_fallback(bytes, fallback) {
            Ok(encoding) => encoding.name().to_string(),
            Err(e) => {
                log::debug!("{}: {e}", path.display());
                "malformed".to_string()
            }
        }
    };

    Detection {
        path: path.display().to_string(),
        encoding,
        bytes: bytes.len() as u64,
    }
}
