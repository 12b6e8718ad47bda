//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use cjkspace_core::config::defaults;
use cjkspace_core::{SpacingConfig, ASCII_SPACE, PUNCTUATION_SPACE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Selectable spacing glyphs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GlyphChoice {
    /// U+2008 PUNCTUATION SPACE
    #[default]
    Punctuation,
    /// U+0020 SPACE
    Space,
}

impl GlyphChoice {
    /// Character inserted for this choice
    pub fn glyph(self) -> char {
        match self {
            GlyphChoice::Punctuation => PUNCTUATION_SPACE,
            GlyphChoice::Space => ASCII_SPACE,
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Spacing configuration
    #[serde(default)]
    pub spacing: SpacingSection,

    /// Encoding configuration
    #[serde(default)]
    pub encoding: EncodingSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Spacing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SpacingSection {
    /// Glyph inserted between CJK and half-width runs
    pub glyph: GlyphChoice,
}

/// Encoding-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EncodingSection {
    /// Codepage label for input that is neither UTF-8 nor BOM-marked
    pub fallback: String,
}

impl Default for EncodingSection {
    fn default() -> Self {
        Self {
            fallback: defaults::FALLBACK_ENCODING.to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputSection {
    /// Rewrite input files instead of writing to stdout
    pub in_place: bool,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the configuration file if one was given, defaults otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build the core spacing configuration, letting flags override the file
    pub fn spacing_config(
        &self,
        glyph: Option<GlyphChoice>,
        fallback: Option<&str>,
    ) -> Result<SpacingConfig> {
        let glyph = glyph.unwrap_or(self.spacing.glyph);
        let fallback = fallback.unwrap_or(self.encoding.fallback.as_str());

        SpacingConfig::builder()
            .glyph(glyph.glyph())
            .fallback_encoding(fallback)
            .build()
            .map_err(|e| {
                let message = match e {
                    cjkspace_core::Error::Configuration(message) => message,
                    other => other.to_string(),
                };
                CliError::ConfigError(message).into()
            })
    }
}
