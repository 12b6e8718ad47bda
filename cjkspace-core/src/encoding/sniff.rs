//! Byte-pattern classification

use super::Encoding;
use crate::error::{Error, Result};

/// UTF-8 byte-order mark
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// UTF-16 big-endian byte-order mark
pub const UTF16BE_BOM: &[u8] = &[0xFE, 0xFF];

/// UTF-16 little-endian byte-order mark
pub const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Outcome of the UTF-8 structure scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Check {
    /// Every lead byte was followed by its continuation bytes
    Valid,
    /// A lead byte or continuation byte had the wrong shape
    Invalid,
    /// Input ended inside a multi-byte sequence
    Truncated {
        /// Continuation bytes still expected
        pending: usize,
    },
}

/// Offset of the first NUL byte, if any
pub fn find_nul(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&byte| byte == 0)
}

/// Heuristic text check: any NUL byte marks the buffer as binary
pub fn is_text(bytes: &[u8]) -> bool {
    find_nul(bytes).is_none()
}

/// Scan the buffer for UTF-8 lead/continuation structure
///
/// Lead bytes announce up to five continuation bytes (the pre-2003 six-byte
/// form), so this accepts some sequences a strict decoder would reject.
/// Decoding later replaces those with U+FFFD.
pub fn check_utf8(bytes: &[u8]) -> Utf8Check {
    // 1 means "expect a lead byte next"; n > 1 means n - 1 continuations pending
    let mut expected = 1usize;

    for &byte in bytes {
        if expected == 1 {
            if byte >= 0x80 {
                let mut probe = byte;
                loop {
                    probe <<= 1;
                    if probe & 0x80 == 0 {
                        break;
                    }
                    expected += 1;
                }
                if expected == 1 || expected > 6 {
                    return Utf8Check::Invalid;
                }
            }
        } else {
            if byte & 0xC0 != 0x80 {
                return Utf8Check::Invalid;
            }
            expected -= 1;
        }
    }

    if expected > 1 {
        Utf8Check::Truncated {
            pending: expected - 1,
        }
    } else {
        Utf8Check::Valid
    }
}

/// Scan for UTF-8 without a byte-order mark
///
/// A buffer that starts with the UTF-8 BOM is reported as [`Utf8Check::Invalid`]
/// so it classifies as [`Encoding::Utf8Bom`] instead.
pub fn check_utf8_without_bom(bytes: &[u8]) -> Utf8Check {
    if bytes.starts_with(UTF8_BOM) {
        return Utf8Check::Invalid;
    }
    check_utf8(bytes)
}

/// Classify the buffer, falling back to windows-1252
pub fn detect_encoding(bytes: &[u8]) -> Result<Encoding> {
    detect_encoding_with_fallback(bytes, encoding_rs::WINDOWS_1252)
}

/// Classify the buffer
///
/// Precedence: UTF-8 without BOM, UTF-8 BOM, UTF-16BE BOM, UTF-16LE BOM,
/// then the legacy fallback. A buffer that ends inside a UTF-8 sequence is
/// an error, not a fallback.
pub fn detect_encoding_with_fallback(
    bytes: &[u8],
    fallback: &'static encoding_rs::Encoding,
) -> Result<Encoding> {
    let encoding = match check_utf8_without_bom(bytes) {
        Utf8Check::Valid => Encoding::Utf8,
        Utf8Check::Truncated { pending } => return Err(Error::MalformedEncoding { pending }),
        Utf8Check::Invalid if bytes.starts_with(UTF8_BOM) => Encoding::Utf8Bom,
        Utf8Check::Invalid if bytes.starts_with(UTF16BE_BOM) => Encoding::Utf16Be,
        Utf8Check::Invalid if bytes.starts_with(UTF16LE_BOM) => Encoding::Utf16Le,
        Utf8Check::Invalid => Encoding::Legacy(fallback),
    };

    log::debug!("detected encoding {encoding} for {} bytes", bytes.len());
    Ok(encoding)
}
