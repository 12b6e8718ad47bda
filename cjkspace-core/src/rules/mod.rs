//! Rewrite rules and the ordered pipeline that applies them
//!
//! A [`Rule`] pairs a compiled pattern with a replacement template. The
//! [`Pipeline`] runs every rule, in table order, as a full non-overlapping
//! scan over the current text; pass N+1 sees the output of pass N.
//!
//! Patterns consume their trailing context (the engine has no lookahead),
//! so a scan can skip a match that overlaps the previous one, as in
//! `中:中:中`. Each pass is therefore repeated until the text stops
//! changing.
//!
//! Cleanup passes can also expose a pattern that an earlier pass would have
//! claimed, so the whole sequence is swept again until a sweep leaves the
//! text unchanged. The result is a fixed point: spacing it again is a no-op.

mod table;

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

pub use table::RULE_NAMES;

/// Upper bound on repeated scans of a single pass
const MAX_ROUNDS: usize = 16;

/// Upper bound on full sweeps of the rule sequence
const MAX_SWEEPS: usize = 8;

/// One element of a replacement template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    /// Text of a capture group (empty if the group did not participate)
    Group(usize),
    /// Capture group converted to fullwidth punctuation, whitespace dropped
    Fullwidth(usize),
    /// The configured spacing glyph
    Glyph,
    /// A literal U+0020, independent of the configured glyph
    Space,
    /// Fixed text
    Literal(&'static str),
}

impl Piece {
    fn render(self, caps: &Captures<'_>, glyph: char, out: &mut String) {
        match self {
            Piece::Group(index) => out.push_str(caps.get(index).map_or("", |m| m.as_str())),
            Piece::Fullwidth(index) => {
                out.push_str(&to_fullwidth(caps.get(index).map_or("", |m| m.as_str())))
            }
            Piece::Glyph => out.push(glyph),
            Piece::Space => out.push(' '),
            Piece::Literal(text) => out.push_str(text),
        }
    }
}

/// A compiled rewrite rule
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    template: &'static [Piece],
}

impl Rule {
    /// Compile a rule from its pattern source
    pub fn new(
        name: &'static str,
        pattern: &str,
        template: &'static [Piece],
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            template,
        })
    }

    /// Rule name, used in trace output
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replace every non-overlapping match, left to right
    ///
    /// Returns `Cow::Borrowed` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str, glyph: char) -> Cow<'t, str> {
        self.pattern.replace_all(text, |caps: &Captures<'_>| {
            let mut out = String::new();
            for piece in self.template {
                piece.render(caps, glyph, &mut out);
            }
            out
        })
    }
}

/// The fixed, ordered rule sequence
#[derive(Debug)]
pub struct Pipeline {
    rules: Vec<Rule>,
}

impl Pipeline {
    /// Compile the built-in rule table
    pub fn compile() -> Result<Self, regex::Error> {
        let rules = table::definitions()
            .into_iter()
            .map(|def| Rule::new(def.name, &def.pattern, def.template))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Process-wide compiled pipeline, built on first use
    pub fn shared() -> &'static Pipeline {
        static PIPELINE: OnceLock<Pipeline> = OnceLock::new();
        PIPELINE.get_or_init(|| Pipeline::compile().expect("built-in rewrite rules must compile"))
    }

    /// Rules in application order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Sweep the rule sequence over the text until it settles
    pub fn run(&self, text: &str, glyph: char) -> String {
        let mut current = text.to_owned();

        for sweep in 1..=MAX_SWEEPS {
            let next = self.sweep(&current, glyph);
            if next == current {
                if sweep > 2 {
                    log::debug!("text settled after {sweep} sweeps");
                }
                return next;
            }
            current = next;
        }

        log::warn!("text still changing after {MAX_SWEEPS} sweeps");
        current
    }

    /// Run every pass once, committing each pass before the next
    ///
    /// A pass is rescanned until it leaves the text unchanged.
    pub fn sweep(&self, text: &str, glyph: char) -> String {
        let mut current = text.to_owned();

        for rule in &self.rules {
            let mut rounds = 0;
            while rounds < MAX_ROUNDS {
                let rewritten = match rule.apply(&current, glyph) {
                    Cow::Owned(rewritten) if rewritten != current => rewritten,
                    _ => break,
                };
                current = rewritten;
                rounds += 1;
            }

            if rounds == MAX_ROUNDS {
                log::warn!("pass {} still changing after {MAX_ROUNDS} rounds", rule.name());
            } else if rounds > 0 {
                log::trace!("pass {} rewrote text in {rounds} round(s)", rule.name());
            }
        }

        current
    }
}

/// Map ASCII punctuation to its fullwidth form and drop whitespace
pub fn to_fullwidth(symbols: &str) -> String {
    symbols
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| match ch {
            '~' => '～',
            '!' => '！',
            ';' => '；',
            ':' => '：',
            ',' => '，',
            '.' => '。',
            '?' => '？',
            other => other,
        })
        .collect()
}
