//! Byte-level spacing: sniffing, decode, spacing, re-encode

use cjkspace_core::encoding::{UTF16BE_BOM, UTF16LE_BOM, UTF8_BOM};
use cjkspace_core::{detect_encoding, Encoding, Error, Spacer, SpacingConfig};

fn ascii_spacer() -> Spacer {
    Spacer::with_config(SpacingConfig::ascii_space())
}

fn with_bom(bom: &[u8], payload: &[u8]) -> Vec<u8> {
    let mut bytes = bom.to_vec();
    bytes.extend_from_slice(payload);
    bytes
}

fn utf16(text: &str, big_endian: bool) -> Vec<u8> {
    text.encode_utf16()
        .flat_map(|unit| {
            if big_endian {
                unit.to_be_bytes()
            } else {
                unit.to_le_bytes()
            }
        })
        .collect()
}

#[test]
fn test_utf8_round_trip() {
    let output = ascii_spacer()
        .spacing_bytes("當你凝視著bug，bug也凝視著你".as_bytes())
        .unwrap();
    assert_eq!(output, "當你凝視著 bug，bug 也凝視著你".as_bytes());
}

#[test]
fn test_utf8_default_glyph_is_multibyte() {
    let output = Spacer::with_config(SpacingConfig::punctuation_space())
        .spacing_bytes("中文abc".as_bytes())
        .unwrap();
    assert_eq!(output, "中文\u{2008}abc".as_bytes());
    // U+2008 is three bytes in UTF-8
    assert_eq!(output.len(), "中文abc".len() + 3);
}

#[test]
fn test_unchanged_input_returned_as_is() {
    let input = "already spaced 中文 text".as_bytes();
    assert_eq!(ascii_spacer().spacing_bytes(input).unwrap(), input);
}

#[test]
fn test_nul_byte_rejected() {
    let mut input = "中文abc".as_bytes().to_vec();
    input.push(0);
    let offset = input.len() - 1;

    assert_eq!(
        ascii_spacer().spacing_bytes(&input),
        Err(Error::InvalidFormat { offset })
    );
}

#[test]
fn test_ascii_utf16_is_not_text() {
    // ASCII in UTF-16 carries a zero byte per character
    let input = with_bom(UTF16LE_BOM, &utf16("abc", false));
    assert!(matches!(
        ascii_spacer().spacing_bytes(&input),
        Err(Error::InvalidFormat { .. })
    ));
}

#[test]
fn test_truncated_utf8_rejected() {
    let bytes = "中文".as_bytes();
    let input = &bytes[..bytes.len() - 1];

    assert_eq!(
        ascii_spacer().spacing_bytes(input),
        Err(Error::MalformedEncoding { pending: 1 })
    );
}

#[test]
fn test_utf8_bom_preserved() {
    let input = with_bom(UTF8_BOM, "中文abc".as_bytes());
    assert_eq!(detect_encoding(&input).unwrap(), Encoding::Utf8Bom);

    let output = ascii_spacer().spacing_bytes(&input).unwrap();
    assert_eq!(output, with_bom(UTF8_BOM, "中文 abc".as_bytes()));
}

#[test]
fn test_utf16_big_endian_round_trip() {
    let input = with_bom(UTF16BE_BOM, &utf16("中文α", true));
    assert_eq!(detect_encoding(&input).unwrap(), Encoding::Utf16Be);

    let output = ascii_spacer().spacing_bytes(&input).unwrap();
    assert_eq!(output, with_bom(UTF16BE_BOM, &utf16("中文 α", true)));
}

#[test]
fn test_utf16_little_endian_round_trip() {
    let input = with_bom(UTF16LE_BOM, &utf16("中文α", false));
    assert_eq!(detect_encoding(&input).unwrap(), Encoding::Utf16Le);

    let output = ascii_spacer().spacing_bytes(&input).unwrap();
    assert_eq!(output, with_bom(UTF16LE_BOM, &utf16("中文 α", false)));
}

#[test]
fn test_legacy_fallback_codepage() {
    let gbk = SpacingConfig::builder()
        .glyph(' ')
        .fallback_encoding("gbk")
        .build()
        .unwrap();
    let spacer = Spacer::with_config(gbk);

    let (input, _, _) = encoding_rs::GBK.encode("中文abc");
    let (expected, _, _) = encoding_rs::GBK.encode("中文 abc");

    assert_eq!(spacer.spacing_bytes(&input).unwrap(), expected.into_owned());
}

#[test]
fn test_legacy_unencodable_glyph() {
    let gbk = SpacingConfig::builder()
        .glyph('\u{2008}')
        .fallback_encoding("gbk")
        .build()
        .unwrap();
    let (input, _, _) = encoding_rs::GBK.encode("中文abc");

    assert_eq!(
        Spacer::with_config(gbk).spacing_bytes(&input),
        Err(Error::Unencodable { encoding: "GBK" })
    );
}

#[test]
fn test_empty_buffer() {
    assert_eq!(ascii_spacer().spacing_bytes(b"").unwrap(), Vec::<u8>::new());
}
