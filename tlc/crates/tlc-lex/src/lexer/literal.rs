//! Character and string literal lexing.
//!
//! Quotes are consumed but never buffered, and escape sequences are stored
//! as the byte they denote.

use crate::charclass::decode_escape;
use crate::cursor::{ByteSource, EOF_BYTE};
use crate::token::TokenKind;
use crate::Lexer;

use super::core::{Malformed, Scan, State, Step};

impl<'a, S: ByteSource> Lexer<'a, S> {
    pub(super) fn in_char(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'\\' => {
                self.cursor.advance();
                Step::Goto(State::InCharEscape)
            },
            b'\n' | EOF_BYTE => Step::Fail(Malformed::UnclosedChar),
            b'\'' => {
                self.cursor.advance();
                Step::Fail(Malformed::EmptyChar)
            },
            _ => {
                self.consume(scan);
                Step::Goto(State::InCharExpectClose)
            },
        }
    }

    pub(super) fn in_char_escape(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match decode_escape(byte, b'\'') {
            Some(decoded) => {
                self.cursor.advance();
                scan.push(decoded);
                Step::Goto(State::InCharExpectClose)
            },
            None => {
                self.skip_literal(b'\'');
                Step::Fail(Malformed::InvalidEscape)
            },
        }
    }

    pub(super) fn in_char_expect_close(&mut self, byte: u8) -> Step {
        if byte == b'\'' {
            self.cursor.advance();
            Step::Emit(TokenKind::Character)
        } else {
            self.skip_literal(b'\'');
            Step::Fail(Malformed::MultiChar)
        }
    }

    pub(super) fn in_string(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'\\' => {
                self.cursor.advance();
                Step::Goto(State::InStringEscape)
            },
            b'"' => {
                self.cursor.advance();
                Step::Emit(TokenKind::String)
            },
            b'\n' | EOF_BYTE => Step::Fail(Malformed::UnclosedString),
            _ => {
                self.consume(scan);
                Step::Goto(State::InString)
            },
        }
    }

    pub(super) fn in_string_escape(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match decode_escape(byte, b'"') {
            Some(decoded) => {
                self.cursor.advance();
                scan.push(decoded);
                Step::Goto(State::InString)
            },
            None => {
                self.skip_literal(b'"');
                Step::Fail(Malformed::InvalidEscape)
            },
        }
    }

    /// Skips the rest of a broken literal through its closing quote.
    ///
    /// Stops in front of a newline or the end of input, which are left for
    /// the next scan.
    fn skip_literal(&mut self, quote: u8) {
        loop {
            match self.cursor.peek() {
                EOF_BYTE | b'\n' => return,
                b'\\' => {
                    self.cursor.advance();
                    if !matches!(self.cursor.peek(), EOF_BYTE | b'\n') {
                        self.cursor.advance();
                    }
                },
                b if b == quote => {
                    self.cursor.advance();
                    return;
                },
                _ => {
                    self.cursor.advance();
                },
            }
        }
    }
}
