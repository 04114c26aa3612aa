//! tlc-lex - Lexical Analyzer for the Tilde Programming Language
//!
//! This crate turns Tilde source text into a stream of typed tokens for the
//! parser. Scanning is a single deterministic automaton driven one byte at a
//! time: every call to [`Lexer::next_token`] produces exactly one token,
//! including error tokens for malformed literals and comments, and the scan
//! always carries on afterwards.
//!
//! # Example Usage
//!
//! ```
//! use tlc_util::Handler;
//! use tlc_lex::{Lexer, TokenKind};
//!
//! let source = "if x == 10 write \"ten\" ~ done";
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source, &handler);
//!
//! assert_eq!(lexer.next_token().kind(), TokenKind::KeywordIf);
//!
//! // The rest, up to but excluding CodeEnd
//! let kinds: Vec<TokenKind> = lexer.map(|t| t.kind()).collect();
//! assert_eq!(kinds.last(), Some(&TokenKind::SingleLineComment));
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`keyword`] - Reserved word classification
//! - [`lexer`] - Scanning automaton
//! - [`cursor`] - Byte producers for buffers and streams
//! - [`charclass`] - 7-bit byte classes and escape decoding
//! - [`config`] - Lexer configuration
//! - [`error`] - Error types
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `elseif`, `for`, `int`, `decimal`, `char`, `string`,
//! `boolean`, `read`, `write`, `true`, `false`, `null` and the noise word
//! `do`. Matching is case-sensitive.
//!
//! ## Identifiers and literals
//!
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//! - **Number**: `[0-9]+`
//! - **Character**: `'a'`, `'\n'`
//! - **String**: `"text"`, escapes `\n \t \" \\`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+ - * % / ^` and `DIV`
//! - **Boolean**: `==`, `or`, `and`
//! - **Assignment**: `=`
//!
//! `DIV`, `or` and `and` only count as operators when they make up a whole
//! word, so `order` and `android` are identifiers.
//!
//! ## Delimiters
//!
//! `( ) [ ] { } ,`
//!
//! ## Comments
//!
//! `~` to the end of the line, `~/ ... /~` for blocks.
//!
//! ## Special
//!
//! - **Unknown**: unrecognized bytes and malformed literals
//! - **LexemeTooLong**: lexemes past the configured limit
//! - **CodeEnd**: end of input, returned again on every later call

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charclass;
pub mod config;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::{ConfigError, LexerConfig};
pub use cursor::{ByteSource, Cursor, StreamCursor};
pub use error::{LexError, LexResult};
pub use keyword::classify;
pub use lexer::Lexer;
pub use token::{Token, TokenKind, MAX_LEXEME_LEN};

use tlc_util::Handler;

/// Scans a whole source string, returning every token including the final
/// `CodeEnd`. Diagnostics are discarded; use [`Lexer`] with a [`Handler`] to
/// keep them.
///
/// ```
/// use tlc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("5 DIV 2");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3].kind(), TokenKind::CodeEnd);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    Lexer::new(source, &handler).tokenize()
}
