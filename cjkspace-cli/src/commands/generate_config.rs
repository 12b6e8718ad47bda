//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const TEMPLATE: &str = r#"# cjkspace configuration
#
# Command-line flags override the values below.

[spacing]
# Glyph inserted between CJK and half-width text:
#   "punctuation"  U+2008 PUNCTUATION SPACE (narrow)
#   "space"        U+0020 SPACE
glyph = "punctuation"

[encoding]
# Codepage assumed for input that is neither UTF-8 nor marked by a BOM.
# Any WHATWG label works, e.g. "windows-1252", "gbk", "big5", "shift_jis".
fallback = "windows-1252"

[output]
# Rewrite input files instead of writing to stdout
in_place = false
"#;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, Self::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Configuration template written to {}",
            self.output.display()
        );
        println!();
        println!("Use it with:");
        println!(
            "   cjkspace --config {} process -i input.txt",
            self.output.display()
        );

        Ok(())
    }

    /// Template configuration content
    pub fn template() -> &'static str {
        TEMPLATE
    }
}
