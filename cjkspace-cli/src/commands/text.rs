//! Text command implementation

use super::{RunContext, SpacingArgs};
use anyhow::Result;
use clap::Args;
use std::io::Write;

/// Arguments for the text command
#[derive(Debug, Args)]
pub struct TextArgs {
    /// Strings to space
    #[arg(value_name = "TEXT", required = true)]
    pub text: Vec<String>,

    #[command(flatten)]
    pub spacing: SpacingArgs,
}

impl TextArgs {
    /// Execute the text command
    pub fn execute<W: Write>(&self, context: &RunContext, mut writer: W) -> Result<()> {
        let spacer = self.spacing.spacer(&context.config)?;

        for text in &self.text {
            writeln!(writer, "{}", spacer.spacing(text))?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlyphChoice;

    fn run(args: &TextArgs) -> String {
        let mut out = Vec::new();
        args.execute(&RunContext::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_one_line_per_argument() {
        let args = TextArgs {
            text: vec!["中文English".to_string(), "前面:後面".to_string()],
            spacing: SpacingArgs {
                glyph: Some(GlyphChoice::Space),
                fallback_encoding: None,
            },
        };
        assert_eq!(run(&args), "中文 English\n前面：後面\n");
    }

    #[test]
    fn test_default_glyph_is_punctuation_space() {
        let args = TextArgs {
            text: vec!["中文English".to_string()],
            spacing: SpacingArgs::default(),
        };
        assert_eq!(run(&args), "中文\u{2008}English\n");
    }
}
