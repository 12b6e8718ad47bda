//! Spacing configuration
//!
//! The glyph inserted between CJK and ANS runs has a process-wide default,
//! stored atomically so concurrent readers see either the old or the new
//! value (last writer wins). Callers that need a stable value across calls
//! build a [`SpacingConfig`] and hand it to a [`Spacer`](crate::Spacer).

use crate::error::{Error, Result};
use std::sync::atomic::{AtomicU32, Ordering};

/// U+2008 PUNCTUATION SPACE, the default spacing glyph
pub const PUNCTUATION_SPACE: char = '\u{2008}';

/// Ordinary U+0020 SPACE
pub const ASCII_SPACE: char = ' ';

/// Default constants
pub mod defaults {
    /// Label of the codepage assumed when the sniffer finds neither UTF-8
    /// nor a byte-order mark
    pub const FALLBACK_ENCODING: &str = "windows-1252";
}

static SPACING_GLYPH: AtomicU32 = AtomicU32::new(PUNCTUATION_SPACE as u32);

/// Current process-wide spacing glyph
pub fn spacing_glyph() -> char {
    char::from_u32(SPACING_GLYPH.load(Ordering::Relaxed)).unwrap_or(PUNCTUATION_SPACE)
}

/// Replace the process-wide spacing glyph
///
/// Affects every later call that reads the process default, including
/// [`spacing`](crate::spacing) and newly created [`SpacingConfig`] values.
pub fn set_spacing_glyph(glyph: char) -> Result<()> {
    validate_glyph(glyph)?;
    log::debug!("process spacing glyph set to U+{:04X}", glyph as u32);
    SPACING_GLYPH.store(glyph as u32, Ordering::Relaxed);
    Ok(())
}

/// Restore [`PUNCTUATION_SPACE`] as the process-wide spacing glyph
pub fn reset_spacing_glyph() {
    SPACING_GLYPH.store(PUNCTUATION_SPACE as u32, Ordering::Relaxed);
}

fn validate_glyph(glyph: char) -> Result<()> {
    if glyph.is_whitespace() && !glyph.is_control() {
        Ok(())
    } else {
        Err(Error::Configuration(format!(
            "spacing glyph must be a non-control space character, got U+{:04X}",
            glyph as u32
        )))
    }
}

/// Per-spacer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacingConfig {
    pub(crate) glyph: char,
    pub(crate) fallback: &'static encoding_rs::Encoding,
}

impl Default for SpacingConfig {
    /// Snapshot of the process-wide glyph with the default fallback codepage
    fn default() -> Self {
        Self {
            glyph: spacing_glyph(),
            fallback: encoding_rs::WINDOWS_1252,
        }
    }
}

impl SpacingConfig {
    /// Create a configuration builder
    pub fn builder() -> SpacingConfigBuilder {
        SpacingConfigBuilder::default()
    }

    /// Narrow spacing with U+2008, regardless of the process default
    pub fn punctuation_space() -> Self {
        Self {
            glyph: PUNCTUATION_SPACE,
            ..Self::default()
        }
    }

    /// Ordinary U+0020 spacing, regardless of the process default
    pub fn ascii_space() -> Self {
        Self {
            glyph: ASCII_SPACE,
            ..Self::default()
        }
    }

    /// Glyph inserted between CJK and ANS runs
    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Codepage used when the sniffer falls through to the legacy case
    pub fn fallback_encoding(&self) -> &'static encoding_rs::Encoding {
        self.fallback
    }
}

/// Fluent builder for [`SpacingConfig`]
#[derive(Debug, Default)]
pub struct SpacingConfigBuilder {
    glyph: Option<char>,
    fallback: Option<String>,
}

impl SpacingConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the spacing glyph
    pub fn glyph(mut self, glyph: char) -> Self {
        self.glyph = Some(glyph);
        self
    }

    /// Set the legacy fallback codepage by WHATWG label (e.g. "gbk", "shift_jis")
    pub fn fallback_encoding(mut self, label: impl Into<String>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SpacingConfig> {
        let mut config = SpacingConfig::default();

        if let Some(glyph) = self.glyph {
            validate_glyph(glyph)?;
            config.glyph = glyph;
        }

        if let Some(label) = self.fallback {
            config.fallback = resolve_fallback(&label)?;
        }

        Ok(config)
    }
}

/// Resolve a fallback codepage label
///
/// Only encodings that can both decode and re-encode are accepted; UTF-16
/// and the replacement encoding are rejected because encoding_rs writes
/// them back as UTF-8.
pub fn resolve_fallback(label: &str) -> Result<&'static encoding_rs::Encoding> {
    let encoding = encoding_rs::Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::Configuration(format!("unknown encoding label: {label}")))?;

    if encoding.output_encoding() != encoding {
        return Err(Error::Configuration(format!(
            "{} cannot be used as a fallback encoding",
            encoding.name()
        )));
    }

    Ok(encoding)
}
