//! The built-in rule table
//!
//! Order is load-bearing: the cleanup passes undo spacing that earlier
//! passes inserted inside quote and bracket pairs, and the general CJK/ANS
//! pass runs last so the special cases can claim their patterns first.

use super::Piece::{self, Fullwidth, Glyph, Group, Literal, Space};
use crate::classes::{
    ANS_AFTER_CJK, ANS_BEFORE_CJK, CJK, CLOSE_BRACKET, INTERPUNCT, LEFT_BRACKET, MIDDLE_DOT,
    OPEN_BRACKET, OPERATOR, QUOTE, RIGHT_BRACKET, VARIATION_SELECTOR,
};

/// Rule names in application order
pub const RULE_NAMES: &[&str] = &[
    "fullwidth_cjk_symbols_cjk",
    "fullwidth_cjk_symbols",
    "dots_cjk",
    "cjk_colon_ans",
    "cjk_quote",
    "quote_cjk",
    "quote_pair_interior",
    "cjk_apostrophe",
    "apostrophe_cjk",
    "possessive",
    "hash_cjk_hash",
    "cjk_hash",
    "hash_cjk",
    "cjk_operator_ans",
    "ans_operator_cjk",
    "slash_path",
    "path_slash",
    "cjk_left_bracket",
    "right_bracket_cjk",
    "bracket_pair_interior",
    "ans_curly_quoted",
    "curly_quoted_ans",
    "alnum_left_bracket",
    "right_bracket_alnum",
    "cjk_ans",
    "ans_cjk",
    "percent_letter",
    "middle_dot",
];

const SPACED_PAIR: &[Piece] = &[Group(1), Glyph, Group(2)];
const SPACED_OPERATOR: &[Piece] = &[Group(1), Glyph, Group(2), Glyph, Group(3)];
const PAIR_INTERIOR: &[Piece] = &[Group(1), Group(3), Group(5)];

/// Uncompiled rule
pub(super) struct RuleDef {
    pub name: &'static str,
    pub pattern: String,
    pub template: &'static [Piece],
}

fn def(name: &'static str, pattern: String, template: &'static [Piece]) -> RuleDef {
    RuleDef {
        name,
        pattern,
        template,
    }
}

pub(super) fn definitions() -> Vec<RuleDef> {
    let c = CJK;
    let vs = VARIATION_SELECTOR;
    // U+2008 is matched alongside U+0020 wherever a pass removes or
    // normalizes spacing that an earlier pass may have inserted.
    let sp = r"[ \x{2008}]";
    // Horizontal whitespace only; line breaks survive punctuation folding.
    let ws = r"[\p{Zs}\t]*";

    vec![
        // Fullwidth punctuation: `中 : 文` -> `中：文`
        def(
            "fullwidth_cjk_symbols_cjk",
            format!(r"([{c}])({ws}(?:[:;,!?]+|\.){ws})([{c}])"),
            &[Group(1), Fullwidth(2), Group(3)],
        ),
        // Same, with nothing required after the run: `好 !` -> `好！`
        def(
            "fullwidth_cjk_symbols",
            format!(r"([{c}]){ws}([~!;,?]+){ws}"),
            &[Group(1), Fullwidth(2)],
        ),
        // Ellipsis and colon adjacency
        def(
            "dots_cjk",
            format!(r"(\.{{2,}}|\x{{2026}})([{c}])"),
            SPACED_PAIR,
        ),
        // `中:A` takes a fullwidth colon and no glyph
        def(
            "cjk_colon_ans",
            format!(r"([{c}]):([A-Z0-9\(\)])"),
            &[Group(1), Literal("："), Group(2)],
        ),
        // Quotes
        def("cjk_quote", format!(r"([{c}])({QUOTE})"), SPACED_PAIR),
        def("quote_cjk", format!(r"({QUOTE})([{c}])"), SPACED_PAIR),
        // Strip what the two passes above put just inside a quote pair
        def(
            "quote_pair_interior",
            format!(r"((?:{QUOTE})+)(\s*)(.+?)(\s*)((?:{QUOTE})+)"),
            PAIR_INTERIOR,
        ),
        // Apostrophes, keeping possessive 's intact
        def("cjk_apostrophe", format!(r"([{c}])('[^s])"), SPACED_PAIR),
        def("apostrophe_cjk", format!(r"(')([{c}])"), SPACED_PAIR),
        // `car 's` -> `car's`
        def(
            "possessive",
            format!(r"([A-Za-z0-9{c}]){sp}('s)"),
            &[Group(1), Group(2)],
        ),
        // Hashtags: `中#標籤#中` is spaced on the outside only
        def(
            "hash_cjk_hash",
            format!(r"([{c}])(#)([{c}]+)(#)([{c}])"),
            &[Group(1), Glyph, Group(2), Group(3), Group(4), Glyph, Group(5)],
        ),
        def("cjk_hash", format!(r"([{c}])(#\S)"), SPACED_PAIR),
        def("hash_cjk", format!(r"(\S#)([{c}])"), SPACED_PAIR),
        // Operators
        def(
            "cjk_operator_ans",
            format!(r"([{c}])([{OPERATOR}])([A-Za-z0-9])"),
            SPACED_OPERATOR,
        ),
        def(
            "ans_operator_cjk",
            format!(r"([A-Za-z0-9])([{OPERATOR}])([{c}])"),
            SPACED_OPERATOR,
        ),
        // Paths: undo operator spacing around `/` in `/usr/local`
        def(
            "slash_path",
            format!(r"(/){sp}([a-z\-_\./]+)"),
            &[Group(1), Group(2)],
        ),
        def(
            "path_slash",
            format!(r"([/\.])([A-Za-z\-_\./]+){sp}(/)"),
            &[Group(1), Group(2), Group(3)],
        ),
        // Brackets
        def("cjk_left_bracket", format!(r"([{c}])({LEFT_BRACKET})"), SPACED_PAIR),
        def("right_bracket_cjk", format!(r"({RIGHT_BRACKET})([{c}])"), SPACED_PAIR),
        // Strip spacing just inside a bracket pair
        def(
            "bracket_pair_interior",
            format!(r"((?:{OPEN_BRACKET})+)(\s*)(.+?)(\s*)((?:{CLOSE_BRACKET})+)"),
            PAIR_INTERIOR,
        ),
        // Curly-quoted run next to ANS or CJK outside the quotes; the run may
        // already carry glyphs from a previous sweep
        def(
            "ans_curly_quoted",
            format!(
                r"([A-Za-z0-9{c}]){sp}*(\x{{201C}}{vs}?)([A-Za-z0-9{c}\-_ \x{{2008}}]+)(\x{{201D}}{vs}?)"
            ),
            &[Group(1), Glyph, Group(2), Group(3), Group(4)],
        ),
        def(
            "curly_quoted_ans",
            format!(
                r"(\x{{201C}}{vs}?)([A-Za-z0-9{c}\-_ \x{{2008}}]+)(\x{{201D}}{vs}?){sp}*([A-Za-z0-9{c}])"
            ),
            &[Group(1), Group(2), Group(3), Glyph, Group(4)],
        ),
        // Half-width brackets always take an ASCII space
        def(
            "alnum_left_bracket",
            r"([A-Za-z0-9])([\(\[\{])".to_string(),
            &[Group(1), Space, Group(2)],
        ),
        def(
            "right_bracket_alnum",
            r"([\)\]\}])([A-Za-z0-9])".to_string(),
            &[Group(1), Space, Group(2)],
        ),
        // General CJK/ANS boundary
        def("cjk_ans", format!(r"([{c}])([{ANS_AFTER_CJK}])"), SPACED_PAIR),
        def("ans_cjk", format!(r"([{ANS_BEFORE_CJK}])([{c}])"), SPACED_PAIR),
        // `50%off` -> `50% off`
        def(
            "percent_letter",
            r"(%)([A-Za-z])".to_string(),
            &[Group(1), Space, Group(2)],
        ),
        // Any middle-dot variant, with its padding, becomes U+30FB
        def(
            "middle_dot",
            format!(r"[\p{{Zs}}\t]*[{MIDDLE_DOT}][\p{{Zs}}\t]*"),
            &[Literal(INTERPUNCT)],
        ),
    ]
}
