//! Bounded lexeme accumulator.

use std::borrow::Cow;

use crate::error::{LexError, LexResult};

/// Bytes accumulated for the token being scanned.
///
/// Pushing past the limit fails with [`LexError::LexemeTooLong`] and latches
/// the overflow flag; bytes pushed afterwards are dropped.
///
/// ```
/// use tlc_lex::lexer::Lexeme;
///
/// let mut lexeme = Lexeme::new(2);
/// assert!(lexeme.push(b'a').is_ok());
/// assert!(lexeme.push(b'b').is_ok());
/// assert!(lexeme.push(b'c').is_err());
/// assert!(lexeme.is_overflowed());
/// assert_eq!(lexeme.as_bytes(), b"ab");
/// ```
#[derive(Clone, Debug)]
pub struct Lexeme {
    bytes: Vec<u8>,
    limit: usize,
    overflowed: bool,
}

impl Lexeme {
    /// Creates an empty lexeme holding at most `limit` bytes.
    pub fn new(limit: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(limit.min(32)),
            limit,
            overflowed: false,
        }
    }

    /// Appends a byte.
    pub fn push(&mut self, byte: u8) -> LexResult<()> {
        if self.bytes.len() >= self.limit {
            self.overflowed = true;
            return Err(LexError::LexemeTooLong { limit: self.limit });
        }
        self.bytes.push(byte);
        Ok(())
    }

    /// The stored bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of stored bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if nothing is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The configured maximum.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns true once a push has been refused.
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    /// The stored bytes as text. Non-ASCII bytes are replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Consumes the lexeme, returning its text.
    pub fn into_text(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}
