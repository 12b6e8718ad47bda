use anyhow::Result;
use cjkspace_cli::commands::{self, Commands, RunContext};
use cjkspace_cli::config::CliConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Insert spacing between CJK and half-width Latin text",
    propagate_version = true
)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    commands::init_logging(cli.verbose, cli.quiet)?;

    let config = CliConfig::load_optional(cli.config.as_deref())?;
    let context = RunContext {
        config,
        quiet: cli.quiet,
    };

    cli.command.execute(&context)
}
