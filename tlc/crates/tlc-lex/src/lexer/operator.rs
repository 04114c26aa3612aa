//! Assignment and equality lexing.

use crate::charclass::is_whitespace;
use crate::cursor::{ByteSource, EOF_BYTE};
use crate::token::TokenKind;
use crate::Lexer;

use super::core::{Scan, Step};

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// A lone `=` must be followed by whitespace or the end of input.
    ///
    /// `==` is complete after two bytes, so `===` lexes as `==` and then a
    /// fresh `=`. Any other successor is swallowed into an unknown token.
    pub(super) fn in_equal(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'=' => {
                self.consume(scan);
                Step::Emit(TokenKind::BooleanOperator)
            },
            b if b == EOF_BYTE || is_whitespace(b) => Step::Emit(TokenKind::AssignmentOperator),
            _ => {
                self.consume(scan);
                Step::Emit(TokenKind::Unknown)
            },
        }
    }
}
