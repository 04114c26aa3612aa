//! Input cursors for traversing source bytes.
//!
//! Every producer the lexer can scan implements [`ByteSource`]: a single
//! byte of lookahead, a consuming advance, and a line counter that moves
//! exactly when a newline byte is consumed. [`Cursor`] walks an in-memory
//! buffer; [`StreamCursor`] polls any [`Read`] implementation one byte at a
//! time.
//!
//! Both treat the input as null-terminated: a `0x00` byte, embedded or past
//! the end, reads as [`EOF_BYTE`] and is never consumed.

use std::io::{self, BufReader, Read};

use log::warn;
use tlc_util::SourceFile;

use crate::error::LexError;

/// Sentinel returned once the input is exhausted.
pub const EOF_BYTE: u8 = 0;

/// A producer of source bytes for the lexer.
pub trait ByteSource {
    /// Returns the current byte without consuming it, or [`EOF_BYTE`].
    fn peek(&self) -> u8;

    /// Consumes and returns the current byte.
    ///
    /// At end of input this returns [`EOF_BYTE`] and changes nothing.
    fn advance(&mut self) -> u8;

    /// Current line number (1-based).
    fn line(&self) -> u32;

    /// Number of bytes consumed so far.
    fn position(&self) -> usize;

    /// Returns true if no bytes remain.
    fn is_at_end(&self) -> bool {
        self.peek() == EOF_BYTE
    }
}

/// A cursor over an in-memory source buffer.
///
/// # Example
///
/// ```
/// use tlc_lex::cursor::{ByteSource, Cursor, EOF_BYTE};
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.peek(), b'a');
/// assert_eq!(cursor.advance(), b'a');
/// assert_eq!(cursor.advance(), b'\n');
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.advance(), b'b');
/// assert_eq!(cursor.advance(), EOF_BYTE);
/// assert_eq!(cursor.position(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source bytes being traversed.
    source: &'a [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Creates a new cursor over raw bytes.
    pub fn from_bytes(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }
}

impl<'a> From<&'a SourceFile> for Cursor<'a> {
    fn from(file: &'a SourceFile) -> Self {
        Self::from_bytes(file.content())
    }
}

impl ByteSource for Cursor<'_> {
    #[inline]
    fn peek(&self) -> u8 {
        self.source
            .get(self.position)
            .copied()
            .unwrap_or(EOF_BYTE)
    }

    #[inline]
    fn advance(&mut self) -> u8 {
        let b = self.peek();
        if b == EOF_BYTE {
            return EOF_BYTE;
        }
        self.position += 1;
        if b == b'\n' {
            self.line = self.line.saturating_add(1);
        }
        b
    }

    #[inline]
    fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }
}

/// A cursor that polls a reader byte by byte.
///
/// One byte is always held in lookahead so that [`ByteSource::peek`] stays
/// side-effect free. A read failure ends the input; the error is kept until
/// the caller collects it with [`StreamCursor::take_error`].
///
/// # Example
///
/// ```
/// use tlc_lex::cursor::{ByteSource, StreamCursor};
///
/// let mut cursor = StreamCursor::new(&b"or\n"[..]);
/// assert_eq!(cursor.advance(), b'o');
/// assert_eq!(cursor.peek(), b'r');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.line(), 2);
/// assert!(cursor.is_at_end());
/// assert!(cursor.take_error().is_none());
/// ```
pub struct StreamCursor<R> {
    bytes: io::Bytes<BufReader<R>>,
    lookahead: u8,
    position: usize,
    line: u32,
    error: Option<io::Error>,
}

impl<R: Read> StreamCursor<R> {
    /// Wraps a reader and primes the lookahead byte.
    pub fn new(reader: R) -> Self {
        let mut cursor = Self {
            bytes: BufReader::new(reader).bytes(),
            lookahead: EOF_BYTE,
            position: 0,
            line: 1,
            error: None,
        };
        cursor.fill();
        cursor
    }

    fn fill(&mut self) {
        self.lookahead = match self.bytes.next() {
            Some(Ok(b)) => b,
            Some(Err(e)) => {
                warn!("source stream failed after {} bytes: {}", self.position, e);
                self.error = Some(e);
                EOF_BYTE
            },
            None => EOF_BYTE,
        };
    }

    /// Takes the read error that ended the input early, if any.
    pub fn take_error(&mut self) -> Option<LexError> {
        self.error.take().map(LexError::Io)
    }
}

impl<R: Read> ByteSource for StreamCursor<R> {
    #[inline]
    fn peek(&self) -> u8 {
        self.lookahead
    }

    fn advance(&mut self) -> u8 {
        let b = self.lookahead;
        if b == EOF_BYTE {
            return EOF_BYTE;
        }
        self.position += 1;
        if b == b'\n' {
            self.line = self.line.saturating_add(1);
        }
        self.fill();
        b
    }

    #[inline]
    fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    fn position(&self) -> usize {
        self.position
    }
}
