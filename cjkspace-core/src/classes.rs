//! Character classes shared by the rewrite rules
//!
//! Classes are kept as regex character-class bodies so the rule table can
//! splice them into patterns, and the predicate helpers below are compiled
//! from the very same bodies. Membership is by explicit Unicode block, not
//! by "is East Asian":
//!
//! - CJK Strokes (U+31C0–U+31EF) and Hangul syllables are outside the class
//! - U+30FB KATAKANA MIDDLE DOT is outside the class, so the canonical
//!   interpunct produced by the middle-dot pass never triggers spacing
//! - U+22EF MIDLINE HORIZONTAL ELLIPSIS is excluded from the math symbols

use regex::Regex;
use std::sync::OnceLock;

/// Unicode blocks treated as CJK
pub const CJK_RANGES: &[(char, char)] = &[
    ('\u{2E80}', '\u{2EFF}'), // CJK Radicals Supplement
    ('\u{2F00}', '\u{2FDF}'), // Kangxi Radicals
    ('\u{3040}', '\u{309F}'), // Hiragana
    ('\u{30A0}', '\u{30FA}'), // Katakana, up to the middle dot
    ('\u{30FC}', '\u{30FF}'), // Katakana, after the middle dot
    ('\u{3100}', '\u{312F}'), // Bopomofo
    ('\u{3200}', '\u{32FF}'), // Enclosed CJK Letters and Months
    ('\u{3400}', '\u{4DBF}'), // CJK Unified Ideographs Extension A
    ('\u{4E00}', '\u{9FFF}'), // CJK Unified Ideographs
    ('\u{F900}', '\u{FAFF}'), // CJK Compatibility Ideographs
];

/// Class body for [`CJK_RANGES`]
pub const CJK: &str = r"\x{2E80}-\x{2EFF}\x{2F00}-\x{2FDF}\x{3040}-\x{309F}\x{30A0}-\x{30FA}\x{30FC}-\x{30FF}\x{3100}-\x{312F}\x{3200}-\x{32FF}\x{3400}-\x{4DBF}\x{4E00}-\x{9FFF}\x{F900}-\x{FAFF}";

/// Variation selectors VS-1..VS-16 without VS-2
pub const VARIATION_SELECTOR: &str = r"[\x{FE00}\x{FE02}-\x{FE0F}]";

/// Quote glyph, consuming an optional trailing variation selector
pub const QUOTE: &str =
    r#"(?:[`"\x{05F4}]|[\x{201C}\x{201D}\x{2018}\x{2019}][\x{FE00}\x{FE02}-\x{FE0F}]?)"#;

/// Glyphs spaced when they follow CJK (angle brackets count on both sides)
pub const LEFT_BRACKET: &str =
    r"(?:[\(\[\{<>\x{201C}\x{2018}][\x{FE00}\x{FE02}-\x{FE0F}]?)";

/// Glyphs spaced when they precede CJK
pub const RIGHT_BRACKET: &str =
    r"(?:[\)\]\}<>\x{201D}\x{2019}][\x{FE00}\x{FE02}-\x{FE0F}]?)";

/// Opening half of a bracket pair
pub const OPEN_BRACKET: &str = r"(?:[\(\[\{<\x{201C}\x{2018}][\x{FE00}\x{FE02}-\x{FE0F}]?)";

/// Closing half of a bracket pair
pub const CLOSE_BRACKET: &str = r"(?:[\)\]\}>\x{201D}\x{2019}][\x{FE00}\x{FE02}-\x{FE0F}]?)";

/// Operator symbols, including math symbols other than U+22EF
pub const OPERATOR: &str = r"\+\-\*/=\&\|<>\p{Sm}--\x{22EF}";

/// ANS characters that get spaced when they follow CJK
pub const ANS_AFTER_CJK: &str = r"A-Za-z\x{0370}-\x{03FF}0-9@\$%\^\&\*\-\+\\=\|/\x{00A1}-\x{00FF}\x{2150}-\x{218F}\p{Sm}--\x{22EF}";

/// ANS characters that get spaced when they precede CJK
///
/// Unlike [`ANS_AFTER_CJK`] this side includes sentence punctuation and
/// omits `@`.
pub const ANS_BEFORE_CJK: &str = r"A-Za-z\x{0370}-\x{03FF}0-9\~\$%\^\&\*\-\+\\=\|/!;:,\.\?\x{00A1}-\x{00FF}\x{2150}-\x{218F}\p{Sm}--\x{22EF}";

/// Middle-dot variants normalized to U+30FB
pub const MIDDLE_DOT: &str = r"\x{00B7}\x{2022}\x{2027}";

/// Canonical CJK interpunct
pub const INTERPUNCT: &str = "\u{30FB}";

/// Check whether a character belongs to the CJK allow-list
pub fn is_cjk(ch: char) -> bool {
    CJK_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&ch))
}

/// Check whether a character is ANS on either side of a CJK boundary
pub fn is_ans(ch: char) -> bool {
    static ANS: OnceLock<Regex> = OnceLock::new();
    let class =
        ANS.get_or_init(|| single_char_class(&format!("[{ANS_AFTER_CJK}][{ANS_BEFORE_CJK}]")));
    matches_char(class, ch)
}

/// Check whether a character is an operator symbol
pub fn is_operator(ch: char) -> bool {
    static OPERATORS: OnceLock<Regex> = OnceLock::new();
    let class = OPERATORS.get_or_init(|| single_char_class(OPERATOR));
    matches_char(class, ch)
}

/// Check whether any character of the text is CJK
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

fn single_char_class(body: &str) -> Regex {
    Regex::new(&format!("^[{body}]$")).expect("built-in character class must compile")
}

fn matches_char(class: &Regex, ch: char) -> bool {
    let mut buf = [0u8; 4];
    class.is_match(ch.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cjk_blocks() {
        assert!(is_cjk('中'));
        assert!(is_cjk('あ'));
        assert!(is_cjk('カ'));
        assert!(is_cjk('ㄅ'));
        assert!(is_cjk('㈠'));
        assert!(is_cjk('豈'));
        assert!(is_cjk('⺀'));
    }

    #[test]
    fn test_cjk_exclusions() {
        // Katakana middle dot and CJK strokes stay outside the class
        assert!(!is_cjk('\u{30FB}'));
        assert!(!is_cjk('\u{31C0}'));
        // Hangul syllables
        assert!(!is_cjk('한'));
        // Fullwidth punctuation
        assert!(!is_cjk('，'));
        assert!(!is_cjk('。'));
        assert!(!is_cjk('a'));
    }

    #[test]
    fn test_ans_members() {
        for ch in ['a', 'Z', '7', '@', '$', '%', '^', '&', '*', '-', '+', '\\', '=', '|', '/'] {
            assert!(is_ans(ch), "{ch:?} should be ANS");
        }
        assert!(is_ans('α'));
        assert!(is_ans('é'));
        assert!(is_ans('Ⅻ'));
        assert!(is_ans('∑'));
    }

    #[test]
    fn test_ans_exclusions() {
        assert!(!is_ans('中'));
        assert!(!is_ans(' '));
        assert!(!is_ans('('));
        assert!(!is_ans('\u{22EF}'));
        assert!(!is_ans('\u{2008}'));
    }

    #[test]
    fn test_operator_members() {
        for ch in ['+', '-', '*', '/', '=', '&', '|', '<', '>', '±', '≠'] {
            assert!(is_operator(ch), "{ch:?} should be an operator");
        }
        assert!(!is_operator('\u{22EF}'));
        assert!(!is_operator('#'));
    }

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("hello 世界"));
        assert!(!contains_cjk("hello world"));
        assert!(!contains_cjk(""));
        assert!(!contains_cjk("안녕하세요"));
    }

    #[test]
    fn test_cjk_class_body_matches_ranges() {
        let class = single_char_class(CJK);
        for &(start, end) in CJK_RANGES {
            assert!(matches_char(&class, start));
            assert!(matches_char(&class, end));
        }
        assert!(!matches_char(&class, '\u{30FB}'));
    }
}
