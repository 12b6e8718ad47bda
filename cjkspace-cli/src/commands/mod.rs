//! CLI command implementations

use crate::config::{CliConfig, GlyphChoice};
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cjkspace_core::Spacer;
use std::io;

pub mod detect;
pub mod generate_config;
pub mod list;
pub mod process;
pub mod text;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Space the given strings and print one per line
    Text(text::TextArgs),

    /// Space files, writing to stdout, an output file or back in place
    Process(process::ProcessArgs),

    /// Report the detected encoding of files
    Detect(detect::DetectArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List the rewrite passes in application order
    Rules,

    /// List the selectable spacing glyphs
    Glyphs,
}

/// Settings shared by every command
#[derive(Debug, Default)]
pub struct RunContext {
    /// Configuration file contents, or defaults
    pub config: CliConfig,
    /// Suppress progress output
    pub quiet: bool,
}

/// Spacing options shared by the text and process commands
#[derive(Debug, Default, Args)]
pub struct SpacingArgs {
    /// Spacing glyph (default: punctuation, or the config file value)
    #[arg(short, long, value_enum, env = "CJKSPACE_GLYPH")]
    pub glyph: Option<GlyphChoice>,

    /// Codepage label for input that is neither UTF-8 nor BOM-marked
    #[arg(long, value_name = "LABEL")]
    pub fallback_encoding: Option<String>,
}

impl SpacingArgs {
    /// Build a spacer from these flags over the loaded configuration
    pub fn spacer(&self, config: &CliConfig) -> Result<Spacer> {
        let spacing = config.spacing_config(self.glyph, self.fallback_encoding.as_deref())?;
        log::debug!(
            "Spacing glyph U+{:04X}, fallback encoding {}",
            spacing.glyph() as u32,
            spacing.fallback_encoding().name()
        );
        Ok(Spacer::with_config(spacing))
    }
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        match self {
            Commands::Text(args) => args.execute(context, io::stdout().lock()),
            Commands::Process(args) => args.execute(context),
            Commands::Detect(args) => args.execute(context, io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => list::execute(*subcommand, io::stdout().lock()),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init()
            .context("Failed to initialize logging")?;
    }

    Ok(())
}
