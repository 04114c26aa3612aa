//! Lexer configuration.

use thiserror::Error;

use crate::token::MAX_LEXEME_LEN;

/// Configuration validation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The lexeme limit cannot hold a single byte
    #[error("invalid lexeme limit: {0}")]
    InvalidLexemeLimit(String),
}

/// Lexer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerConfig {
    /// Maximum bytes accumulated for one lexeme
    pub max_lexeme_len: usize,
    /// Drop comment tokens instead of returning them
    pub skip_comments: bool,
    /// Emit a diagnostic into the handler for every error token
    pub report_diagnostics: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_lexeme_len: MAX_LEXEME_LEN,
            skip_comments: false,
            report_diagnostics: true,
        }
    }
}

impl LexerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lexeme limit
    pub fn with_max_lexeme_len(mut self, limit: usize) -> Self {
        self.max_lexeme_len = limit;
        self
    }

    /// Enable or disable comment skipping
    pub fn with_skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Enable or disable diagnostic reporting
    pub fn with_report_diagnostics(mut self, report: bool) -> Self {
        self.report_diagnostics = report;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_lexeme_len == 0 {
            return Err(ConfigError::InvalidLexemeLimit(
                "max_lexeme_len must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
