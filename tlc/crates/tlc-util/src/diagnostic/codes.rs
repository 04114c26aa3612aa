//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! # Examples
//!
//! ```
//! use tlc_util::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNCLOSED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1005);
//! assert_eq!(code.as_str(), "E1005");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number}` with the number zero-padded to four
/// digits, so `DiagnosticCode::new("W", 1)` displays as `W0001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Character literal reaches a newline or the end of input
    pub const E_LEXER_UNCLOSED_CHAR: Self = Self::new("E", 1001);
    /// E1002: `''` with nothing between the quotes
    pub const E_LEXER_EMPTY_CHAR: Self = Self::new("E", 1002);
    /// E1003: More than one character between single quotes
    pub const E_LEXER_MULTI_CHAR: Self = Self::new("E", 1003);
    /// E1004: Backslash followed by an unsupported escape
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1004);
    /// E1005: String literal reaches a newline or the end of input
    pub const E_LEXER_UNCLOSED_STRING: Self = Self::new("E", 1005);
    /// E1006: `~/` comment without a closing `/~`
    pub const E_LEXER_UNCLOSED_BLOCK_COMMENT: Self = Self::new("E", 1006);
    /// E1007: Byte that starts no token
    pub const E_LEXER_UNEXPECTED_BYTE: Self = Self::new("E", 1007);
    /// E1008: Lexeme longer than the configured limit
    pub const E_LEXER_LEXEME_TOO_LONG: Self = Self::new("E", 1008);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
