//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Spacing or encoding failure for one input
    ProcessingError {
        /// Input that failed (`<stdin>` for standard input)
        source_name: String,
        /// Message from the core library
        message: String,
    },
}

impl CliError {
    /// Wrap a core library error for the named input
    pub fn processing(source_name: impl Into<String>, error: cjkspace_core::Error) -> Self {
        CliError::ProcessingError {
            source_name: source_name.into(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError {
                source_name,
                message,
            } => write!(f, "Processing error in {source_name}: {message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
