//! Encoding detection and encoding-preserving conversion

mod sniff;

use crate::error::{Error, Result};
use std::fmt;

/// Codec type used for legacy codepages
pub use encoding_rs::Encoding as LegacyEncoding;

pub use sniff::{
    check_utf8, check_utf8_without_bom, detect_encoding, detect_encoding_with_fallback, find_nul,
    is_text, Utf8Check, UTF16BE_BOM, UTF16LE_BOM, UTF8_BOM,
};

/// Encoding classification of a byte buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8 without a byte-order mark
    Utf8,
    /// UTF-8 preceded by EF BB BF
    Utf8Bom,
    /// UTF-16 big-endian, preceded by FE FF
    Utf16Be,
    /// UTF-16 little-endian, preceded by FF FE
    Utf16Le,
    /// Single- or multi-byte legacy codepage
    Legacy(&'static LegacyEncoding),
}

impl Encoding {
    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf8Bom => "UTF-8 with BOM",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Legacy(encoding) => encoding.name(),
        }
    }

    /// Byte-order mark written before the payload
    pub fn bom(&self) -> &'static [u8] {
        match self {
            Encoding::Utf8Bom => UTF8_BOM,
            Encoding::Utf16Be => UTF16BE_BOM,
            Encoding::Utf16Le => UTF16LE_BOM,
            Encoding::Utf8 | Encoding::Legacy(_) => &[],
        }
    }

    /// Decode bytes classified as this encoding
    ///
    /// Malformed sequences become U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let payload = bytes.strip_prefix(self.bom()).unwrap_or(bytes);
        let codec = match self {
            Encoding::Utf8 | Encoding::Utf8Bom => encoding_rs::UTF_8,
            Encoding::Utf16Be => encoding_rs::UTF_16BE,
            Encoding::Utf16Le => encoding_rs::UTF_16LE,
            Encoding::Legacy(encoding) => *encoding,
        };
        codec
            .decode_without_bom_handling(payload)
            .0
            .into_owned()
    }

    /// Encode text back to this encoding, restoring its byte-order mark
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let mut out = self.bom().to_vec();

        match self {
            Encoding::Utf8 | Encoding::Utf8Bom => out.extend_from_slice(text.as_bytes()),
            Encoding::Utf16Be => out.extend(text.encode_utf16().flat_map(u16::to_be_bytes)),
            Encoding::Utf16Le => out.extend(text.encode_utf16().flat_map(u16::to_le_bytes)),
            Encoding::Legacy(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(Error::Unencodable {
                        encoding: encoding.name(),
                    });
                }
                out.extend_from_slice(&bytes);
            }
        }

        Ok(out)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
