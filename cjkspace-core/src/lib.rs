//! Spacing between CJK and half-width Latin text
//!
//! This crate inserts a spacing glyph between CJK ideographs/kana and
//! adjacent Latin letters, digits and symbols ("ANS"), normalizes ASCII
//! punctuation written next to CJK to its fullwidth form, and leaves
//! everything else alone.
//!
//! # Architecture
//!
//! - **classes**: Unicode block tables for CJK, ANS, quotes, brackets, operators
//! - **rules**: the ordered rewrite pipeline; every pass scans the whole text
//!   and commits before the next pass runs
//! - **encoding**: byte sniffing (NUL check, UTF-8 structure scan, BOMs) and
//!   encoding-preserving decode/encode
//! - **config**: the spacing glyph, process-wide default and per-spacer
//!
//! # Example
//!
//! ```rust
//! use cjkspace_core::{Spacer, SpacingConfig};
//!
//! let spacer = Spacer::with_config(SpacingConfig::ascii_space());
//! assert_eq!(
//!     spacer.spacing("當你凝視著bug，bug也凝視著你"),
//!     "當你凝視著 bug，bug 也凝視著你"
//! );
//! ```

pub mod classes;
pub mod config;
pub mod encoding;
pub mod error;
pub mod rules;
pub mod spacer;

pub use classes::contains_cjk;
pub use config::{
    reset_spacing_glyph, set_spacing_glyph, spacing_glyph, SpacingConfig, SpacingConfigBuilder,
    ASCII_SPACE, PUNCTUATION_SPACE,
};
pub use encoding::{detect_encoding, is_text, Encoding, Utf8Check};
pub use error::{Error, Result};
pub use spacer::{spacing, spacing_bytes, Spacer};
