//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Raw byte reader
///
/// Inputs are read as bytes; encoding detection happens in the core.
pub struct FileReader;

impl FileReader {
    /// Read a whole file
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        let content =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }

    /// Read standard input to the end
    pub fn read_stdin() -> Result<Vec<u8>> {
        Self::read_from(io::stdin().lock()).context("Failed to read standard input")
    }

    /// Read any reader to the end
    pub fn read_from<R: Read>(mut reader: R) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        reader
            .read_to_end(&mut content)
            .context("Failed to read input")?;
        Ok(content)
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}
