//! List command implementation

use super::ListCommands;
use crate::config::GlyphChoice;
use anyhow::Result;
use clap::ValueEnum;
use cjkspace_core::rules::RULE_NAMES;
use std::io::Write;

/// Print the requested listing
pub fn execute<W: Write>(subcommand: ListCommands, mut writer: W) -> Result<()> {
    match subcommand {
        ListCommands::Rules => {
            for (index, name) in RULE_NAMES.iter().enumerate() {
                writeln!(writer, "{:>2}. {}", index + 1, name)?;
            }
        }
        ListCommands::Glyphs => {
            for choice in GlyphChoice::value_variants() {
                let name = choice
                    .to_possible_value()
                    .map(|value| value.get_name().to_string())
                    .unwrap_or_default();
                let marker = if *choice == GlyphChoice::default() {
                    " (default)"
                } else {
                    ""
                };
                writeln!(
                    writer,
                    "{:<12} U+{:04X}{}",
                    name,
                    choice.glyph() as u32,
                    marker
                )?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}
