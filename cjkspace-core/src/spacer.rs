//! Text and byte entry points

use crate::classes::contains_cjk;
use crate::config::{spacing_glyph, SpacingConfig};
use crate::encoding::{detect_encoding_with_fallback, find_nul};
use crate::error::{Error, Result};
use crate::rules::Pipeline;

/// Spacing processor bound to one configuration
///
/// Unlike the free functions, a `Spacer` keeps the glyph it was built
/// with even if the process-wide default changes afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Spacer {
    config: SpacingConfig,
    pipeline: &'static Pipeline,
}

impl Spacer {
    /// Create a spacer from the current process-wide default
    pub fn new() -> Self {
        Self::with_config(SpacingConfig::default())
    }

    /// Create a spacer with an explicit configuration
    pub fn with_config(config: SpacingConfig) -> Self {
        Self {
            config,
            pipeline: Pipeline::shared(),
        }
    }

    /// Create a spacer that inserts the given glyph
    pub fn with_glyph(glyph: char) -> Result<Self> {
        let config = SpacingConfig::builder().glyph(glyph).build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &SpacingConfig {
        &self.config
    }

    /// Insert spacing between CJK and ANS runs
    pub fn spacing(&self, text: &str) -> String {
        space_text(self.pipeline, text, self.config.glyph)
    }

    /// Space a byte buffer, keeping its detected encoding
    ///
    /// Fails with [`Error::InvalidFormat`] when the buffer holds a NUL byte
    /// and with [`Error::MalformedEncoding`] when it ends inside a UTF-8
    /// sequence.
    pub fn spacing_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        if let Some(offset) = find_nul(bytes) {
            return Err(Error::InvalidFormat { offset });
        }

        let encoding = detect_encoding_with_fallback(bytes, self.config.fallback)?;
        let text = encoding.decode(bytes);
        let spaced = self.spacing(&text);

        if spaced == text {
            log::debug!("no spacing changes, returning input bytes unchanged");
            return Ok(bytes.to_vec());
        }

        encoding.encode(&spaced)
    }
}

impl Default for Spacer {
    fn default() -> Self {
        Self::new()
    }
}

fn space_text(pipeline: &Pipeline, text: &str, glyph: char) -> String {
    let mut chars = text.chars();
    if chars.next().is_none() || chars.next().is_none() {
        return text.to_owned();
    }

    if !contains_cjk(text) {
        log::debug!("no CJK characters, skipping rewrite passes");
        return text.to_owned();
    }

    pipeline.run(text, glyph)
}

/// Insert spacing using the process-wide glyph in effect at call time
pub fn spacing(text: &str) -> String {
    space_text(Pipeline::shared(), text, spacing_glyph())
}

/// Space a byte buffer using the process-wide glyph in effect at call time
pub fn spacing_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    Spacer::new().spacing_bytes(bytes)
}
