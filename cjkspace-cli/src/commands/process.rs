//! Process command implementation

use super::{RunContext, SpacingArgs};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::open_destination;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use cjkspace_core::Spacer;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Rewrite each input file in place
    #[arg(long)]
    pub in_place: bool,

    #[command(flatten)]
    pub spacing: SpacingArgs,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, context: &RunContext) -> Result<()> {
        let spacer = self.spacing.spacer(&context.config)?;
        let in_place = self.in_place || (context.config.output.in_place && self.output.is_none());

        if self.reads_stdin() {
            if in_place {
                return Err(
                    CliError::ConfigError("cannot rewrite standard input in place".into()).into(),
                );
            }
            return self.process_stdin(&spacer);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s)", files.len());

        let mut progress = ProgressReporter::new(context.quiet);
        progress.init_files(files.len() as u64);

        if in_place {
            for path in &files {
                rewrite_in_place(&spacer, path)?;
                progress.file_completed(&path.display().to_string());
            }
        } else {
            let mut destination = open_destination(self.output.as_deref())?;
            for path in &files {
                let spaced = space_file(&spacer, path)?;
                destination
                    .write_all(&spaced)
                    .context("Failed to write output")?;
                progress.file_completed(&path.display().to_string());
            }
            destination.flush().context("Failed to write output")?;
        }

        progress.finish();
        Ok(())
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == STDIN_MARKER
    }

    fn process_stdin(&self, spacer: &Spacer) -> Result<()> {
        let input = FileReader::read_stdin()?;
        let spaced = spacer
            .spacing_bytes(&input)
            .map_err(|e| CliError::processing("<stdin>", e))?;

        let mut destination = open_destination(self.output.as_deref())?;
        destination
            .write_all(&spaced)
            .and_then(|()| destination.flush())
            .context("Failed to write output")?;
        Ok(())
    }
}

/// Read a file and return its spaced bytes
pub fn space_file(spacer: &Spacer, path: &Path) -> Result<Vec<u8>> {
    let input = FileReader::read_bytes(path)?;
    spacer
        .spacing_bytes(&input)
        .map_err(|e| CliError::processing(path.display().to_string(), e).into())
}

/// Space a file and write it back when the content changed
pub fn rewrite_in_place(spacer: &Spacer, path: &Path) -> Result<bool> {
    let input = FileReader::read_bytes(path)?;
    let spaced = spacer
        .spacing_bytes(&input)
        .map_err(|e| CliError::processing(path.display().to_string(), e))?;

    if spaced == input {
        log::debug!("Unchanged: {}", path.display());
        return Ok(false);
    }

    fs::write(path, &spaced).with_context(|| format!("Failed to write file: {}", path.display()))?;
    log::info!("Rewrote {}", path.display());
    Ok(true)
}
