//! Error types for the lexer crate.
//!
//! Malformed input never shows up here: the automaton turns it into error
//! tokens and keeps scanning. These errors cover the edges around a scan:
//! a failing byte stream, rejected configuration, and the lexeme limit as
//! reported by the accumulator before the automaton converts it.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for lexer operations
#[derive(Debug, Error)]
pub enum LexError {
    /// A lexeme grew past the configured maximum length
    #[error("Lexeme exceeds the maximum length of {limit} bytes")]
    LexemeTooLong {
        /// The configured limit in bytes
        limit: usize,
    },

    /// Reading from a byte stream failed mid-scan
    #[error("I/O error while reading source: {0}")]
    Io(#[from] std::io::Error),

    /// The lexer configuration was rejected
    #[error("Invalid lexer configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for lexer operations
pub type LexResult<T> = std::result::Result<T, LexError>;
