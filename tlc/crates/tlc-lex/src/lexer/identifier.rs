//! Identifier, reserved operator and number lexing.

use crate::charclass::{is_digit, is_ident_continue, is_whitespace};
use crate::cursor::{ByteSource, EOF_BYTE};
use crate::keyword;
use crate::token::TokenKind;
use crate::Lexer;

use super::core::{Scan, State, Step};
use super::reserved;

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Identifier body. The completed run goes through the keyword table.
    pub(super) fn in_identifier(&mut self, byte: u8, scan: &mut Scan) -> Step {
        if is_ident_continue(byte) {
            self.consume(scan);
            Step::Goto(State::InIdentifier)
        } else {
            Step::Emit(keyword::classify(&scan.lexeme.text()))
        }
    }

    pub(super) fn in_number(&mut self, byte: u8, scan: &mut Scan) -> Step {
        if is_digit(byte) {
            self.consume(scan);
            Step::Goto(State::InNumber)
        } else {
            Step::Emit(TokenKind::Number)
        }
    }

    /// Walks a reserved operator spelling one byte at a time.
    ///
    /// A byte that keeps the run on a spelling is consumed. Any other
    /// identifier byte hands the run over to [`State::InIdentifier`] with the
    /// prefix kept. A whole spelling followed by whitespace or the end of
    /// input is the operator. Every other successor is swallowed into an
    /// unknown token, as is any non-identifier byte after a partial spelling.
    pub(super) fn in_reserved(&mut self, byte: u8, scan: &mut Scan) -> Step {
        if is_ident_continue(byte) {
            if !scan.lexeme.is_overflowed() && reserved::extends(scan.lexeme.as_bytes(), byte) {
                self.consume(scan);
                return Step::Goto(State::InReserved);
            }
            return Step::Goto(State::InIdentifier);
        }

        match reserved::lookup(scan.lexeme.as_bytes()).exact {
            Some(kind) if byte == EOF_BYTE || is_whitespace(byte) => Step::Emit(kind),
            _ => {
                self.consume(scan);
                Step::Emit(TokenKind::Unknown)
            },
        }
    }
}
