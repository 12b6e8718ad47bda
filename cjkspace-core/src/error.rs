//! Error types for spacing operations

use thiserror::Error;

/// Errors raised by the byte-oriented entry points and configuration
///
/// The text-oriented [`spacing`](crate::spacing) never fails; every variant
/// here describes a property of the input bytes or of the requested setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The buffer contains a NUL byte and is treated as binary
    #[error("invalid format: NUL byte at offset {offset}, input is not text")]
    InvalidFormat {
        /// Byte offset of the first NUL
        offset: usize,
    },

    /// The buffer ends in the middle of a multi-byte UTF-8 sequence
    #[error("malformed encoding: input ends with {pending} continuation byte(s) missing")]
    MalformedEncoding {
        /// Continuation bytes still expected when the input ran out
        pending: usize,
    },

    /// The spaced text holds characters the detected codepage cannot represent
    #[error("cannot encode spaced text as {encoding}")]
    Unencodable {
        /// Name of the target encoding
        encoding: &'static str,
    },

    /// Invalid configuration value
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for spacing operations
pub type Result<T> = std::result::Result<T, Error>;
