//! Comment lexing.
//!
//! `~` starts a comment running to the end of the line and `~/` starts a
//! block comment closed by `/~`. Comments are returned as tokens with their
//! delimiters; the lexer configuration decides whether callers see them.

use crate::cursor::{ByteSource, EOF_BYTE};
use crate::token::TokenKind;
use crate::Lexer;

use super::core::{Malformed, Scan, State, Step};

impl<'a, S: ByteSource> Lexer<'a, S> {
    pub(super) fn in_tilde(&mut self, byte: u8, scan: &mut Scan) -> Step {
        if byte == b'/' {
            self.consume(scan);
            Step::Goto(State::InBlockComment)
        } else {
            Step::Goto(State::InSingleLineComment)
        }
    }

    /// Runs up to, but not including, the newline.
    pub(super) fn in_single_line_comment(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'\n' | EOF_BYTE => Step::Emit(TokenKind::SingleLineComment),
            _ => {
                self.consume(scan);
                Step::Goto(State::InSingleLineComment)
            },
        }
    }

    pub(super) fn in_block_comment(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'/' => {
                self.consume(scan);
                Step::Goto(State::InBlockCommentTilde)
            },
            EOF_BYTE => Step::Fail(Malformed::UnclosedBlockComment),
            _ => {
                self.consume(scan);
                Step::Goto(State::InBlockComment)
            },
        }
    }

    /// A `/` was just buffered; `~` closes the comment.
    pub(super) fn in_block_comment_tilde(&mut self, byte: u8, scan: &mut Scan) -> Step {
        match byte {
            b'~' => {
                self.consume(scan);
                Step::Emit(TokenKind::BlockComment)
            },
            EOF_BYTE => Step::Fail(Malformed::UnclosedBlockComment),
            _ => Step::Goto(State::InBlockComment),
        }
    }
}
