//! Core lexer implementation.
//!
//! This module holds the [`Lexer`] struct, the automaton states and the
//! driving loop. The transitions out of each non-start state live in the
//! sibling modules, grouped by the kind of token they build.

use log::{debug, trace};
use tlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceFile, Span};

use crate::charclass::{
    is_arithmetic, is_delimiter, is_digit, is_ident_start, is_whitespace,
};
use crate::config::LexerConfig;
use crate::cursor::{ByteSource, Cursor, EOF_BYTE};
use crate::error::{LexError, LexResult};
use crate::token::{Token, TokenKind};

use super::lexeme::Lexeme;
use super::reserved;

/// Automaton states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum State {
    Start,
    InIdentifier,
    InNumber,
    /// Buffered bytes are a proper prefix of a reserved operator spelling.
    InReserved,
    InChar,
    InCharEscape,
    InCharExpectClose,
    InString,
    InStringEscape,
    InTilde,
    InSingleLineComment,
    InBlockComment,
    InBlockCommentTilde,
    InEqual,
}

/// Result of one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Step {
    Goto(State),
    Emit(TokenKind),
    Fail(Malformed),
    End,
}

/// Malformed constructs reported with a fixed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Malformed {
    UnclosedChar,
    EmptyChar,
    MultiChar,
    InvalidEscape,
    UnclosedString,
    UnclosedBlockComment,
}

impl Malformed {
    pub(super) fn message(self) -> &'static str {
        match self {
            Malformed::UnclosedChar => "Unclosed Char",
            Malformed::EmptyChar => "Empty char literal",
            Malformed::MultiChar => "Multi-character literal",
            Malformed::InvalidEscape => "Invalid escape sequence",
            Malformed::UnclosedString => "Unclosed String",
            Malformed::UnclosedBlockComment => "Unclosed block comment",
        }
    }

    pub(super) fn code(self) -> DiagnosticCode {
        match self {
            Malformed::UnclosedChar => DiagnosticCode::E_LEXER_UNCLOSED_CHAR,
            Malformed::EmptyChar => DiagnosticCode::E_LEXER_EMPTY_CHAR,
            Malformed::MultiChar => DiagnosticCode::E_LEXER_MULTI_CHAR,
            Malformed::InvalidEscape => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            Malformed::UnclosedString => DiagnosticCode::E_LEXER_UNCLOSED_STRING,
            Malformed::UnclosedBlockComment => DiagnosticCode::E_LEXER_UNCLOSED_BLOCK_COMMENT,
        }
    }
}

/// Per-call scan state, discarded once a token is produced.
pub(super) struct Scan {
    pub(super) lexeme: Lexeme,
    start: usize,
    line: u32,
}

impl Scan {
    fn new(limit: usize, start: usize, line: u32) -> Self {
        Self {
            lexeme: Lexeme::new(limit),
            start,
            line,
        }
    }

    /// Marks where the token starts; whitespace before it is not part of it.
    fn begin(&mut self, start: usize, line: u32) {
        self.start = start;
        self.line = line;
    }

    /// Buffers a byte. An overflow is latched in the lexeme and resolved
    /// when the token completes.
    pub(super) fn push(&mut self, byte: u8) {
        let fresh = !self.lexeme.is_overflowed();
        if let Err(err) = self.lexeme.push(byte) {
            if fresh {
                debug!("line {}: {}", self.line, err);
            }
        }
    }

    fn span(&self, end: usize) -> Span {
        Span::new(self.start, end, self.line)
    }
}

/// Lexer for the Tilde language.
///
/// Each call to [`next_token`](Lexer::next_token) runs the automaton from its
/// start state until exactly one token is complete. Only the cursor survives
/// between calls.
///
/// # Example
///
/// ```
/// use tlc_lex::{Lexer, TokenKind};
/// use tlc_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("5 DIV 2", &handler);
/// assert_eq!(lexer.next_token().kind(), TokenKind::Number);
/// assert_eq!(lexer.next_token().kind(), TokenKind::ArithmeticOperator);
/// assert_eq!(lexer.next_token().kind(), TokenKind::Number);
/// assert_eq!(lexer.next_token().kind(), TokenKind::CodeEnd);
/// ```
pub struct Lexer<'a, S = Cursor<'a>> {
    /// Byte producer being scanned.
    pub(super) cursor: S,

    /// Receives a diagnostic for every error token.
    pub(super) handler: &'a Handler,

    pub(super) config: LexerConfig,

    /// Set once `CodeEnd` has been produced.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` with the default configuration.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self::build(Cursor::new(source), handler, LexerConfig::default())
    }

    /// Creates a lexer over `source` after validating `config`.
    pub fn with_config(
        source: &'a str,
        handler: &'a Handler,
        config: LexerConfig,
    ) -> LexResult<Self> {
        Self::from_source(Cursor::new(source), handler, config)
    }

    /// Creates a lexer over a loaded source file.
    pub fn for_file(file: &'a SourceFile, handler: &'a Handler) -> Self {
        debug!("lexing {} ({} bytes)", file.name(), file.len());
        Self::build(Cursor::from(file), handler, LexerConfig::default())
    }
}

impl<'a, S: ByteSource> Lexer<'a, S> {
    /// Creates a lexer over any byte producer after validating `config`.
    pub fn from_source(cursor: S, handler: &'a Handler, config: LexerConfig) -> LexResult<Self> {
        config.validate().map_err(LexError::from)?;
        Ok(Self::build(cursor, handler, config))
    }

    fn build(cursor: S, handler: &'a Handler, config: LexerConfig) -> Self {
        debug!(
            "lexer created (max_lexeme_len={}, skip_comments={}, report_diagnostics={})",
            config.max_lexeme_len, config.skip_comments, config.report_diagnostics
        );
        Self {
            cursor,
            handler,
            config,
            finished: false,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Comment tokens are stepped over when
    /// [`skip_comments`](LexerConfig::skip_comments) is set. Once the input is
    /// exhausted every call returns `CodeEnd`.
    pub fn next_token(&mut self) -> Token {
        loop {
            let token = self.scan();
            if self.config.skip_comments && token.kind().is_comment() {
                continue;
            }
            return token;
        }
    }

    /// Collects every remaining token, including the final `CodeEnd`.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is(TokenKind::CodeEnd);
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn scan(&mut self) -> Token {
        if self.finished {
            return self.code_end();
        }

        let mut scan = Scan::new(
            self.config.max_lexeme_len,
            self.cursor.position(),
            self.cursor.line(),
        );
        let mut state = State::Start;
        loop {
            let byte = self.cursor.peek();
            let step = match state {
                State::Start => self.start(byte, &mut scan),
                State::InIdentifier => self.in_identifier(byte, &mut scan),
                State::InNumber => self.in_number(byte, &mut scan),
                State::InReserved => self.in_reserved(byte, &mut scan),
                State::InChar => self.in_char(byte, &mut scan),
                State::InCharEscape => self.in_char_escape(byte, &mut scan),
                State::InCharExpectClose => self.in_char_expect_close(byte),
                State::InString => self.in_string(byte, &mut scan),
                State::InStringEscape => self.in_string_escape(byte, &mut scan),
                State::InTilde => self.in_tilde(byte, &mut scan),
                State::InSingleLineComment => self.in_single_line_comment(byte, &mut scan),
                State::InBlockComment => self.in_block_comment(byte, &mut scan),
                State::InBlockCommentTilde => self.in_block_comment_tilde(byte, &mut scan),
                State::InEqual => self.in_equal(byte, &mut scan),
            };
            match step {
                Step::Goto(next) => state = next,
                Step::Emit(kind) => return self.finish(scan, kind),
                Step::Fail(error) => return self.fail(scan, error),
                Step::End => {
                    self.finished = true;
                    return self.code_end();
                },
            }
        }
    }

    fn start(&mut self, byte: u8, scan: &mut Scan) -> Step {
        if byte == EOF_BYTE {
            return Step::End;
        }
        if is_whitespace(byte) {
            self.cursor.advance();
            return Step::Goto(State::Start);
        }

        scan.begin(self.cursor.position(), self.cursor.line());
        match byte {
            b'\'' => {
                self.cursor.advance();
                Step::Goto(State::InChar)
            },
            b'"' => {
                self.cursor.advance();
                Step::Goto(State::InString)
            },
            b'~' => {
                self.consume(scan);
                Step::Goto(State::InTilde)
            },
            b'=' => {
                self.consume(scan);
                Step::Goto(State::InEqual)
            },
            b if is_delimiter(b) => {
                self.consume(scan);
                Step::Emit(TokenKind::Delimiter)
            },
            b if is_arithmetic(b) => {
                self.consume(scan);
                Step::Emit(TokenKind::ArithmeticOperator)
            },
            b if reserved::is_lead(b) => {
                self.consume(scan);
                Step::Goto(State::InReserved)
            },
            b if is_ident_start(b) => {
                self.consume(scan);
                Step::Goto(State::InIdentifier)
            },
            b if is_digit(b) => {
                self.consume(scan);
                Step::Goto(State::InNumber)
            },
            _ => {
                self.consume(scan);
                Step::Emit(TokenKind::Unknown)
            },
        }
    }

    /// Consumes the current byte into the lexeme.
    pub(super) fn consume(&mut self, scan: &mut Scan) {
        let byte = self.cursor.advance();
        scan.push(byte);
    }

    fn finish(&mut self, scan: Scan, kind: TokenKind) -> Token {
        let span = scan.span(self.cursor.position());
        let token = if scan.lexeme.is_overflowed() {
            let message = LexError::LexemeTooLong {
                limit: scan.lexeme.limit(),
            }
            .to_string();
            self.report(DiagnosticCode::E_LEXER_LEXEME_TOO_LONG, message, span);
            Token::new(TokenKind::LexemeTooLong, scan.lexeme.into_text(), span)
        } else if kind == TokenKind::Unknown {
            let text = scan.lexeme.into_text();
            self.report(
                DiagnosticCode::E_LEXER_UNEXPECTED_BYTE,
                format!("unexpected input `{}`", text.escape_debug()),
                span,
            );
            Token::new(TokenKind::Unknown, text, span)
        } else {
            Token::new(kind, scan.lexeme.into_text(), span)
        };
        trace!("{token}");
        token
    }

    fn fail(&mut self, scan: Scan, error: Malformed) -> Token {
        let span = scan.span(self.cursor.position());
        self.report(error.code(), error.message(), span);
        let token = Token::new(TokenKind::Unknown, error.message(), span);
        trace!("{token}");
        token
    }

    fn code_end(&self) -> Token {
        let token = Token::code_end(Span::point(self.cursor.position(), self.cursor.line()));
        trace!("{token}");
        token
    }

    /// Reports a lexical error at `span`.
    fn report(&self, code: DiagnosticCode, message: impl Into<String>, span: Span) {
        let message = message.into();
        debug!("line {}: {} [{}]", span.line, message, code);
        if self.config.report_diagnostics {
            DiagnosticBuilder::error(message)
                .code(code)
                .span(span)
                .emit(self.handler);
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once `CodeEnd` has been produced.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Active configuration.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// The underlying byte producer.
    pub fn source(&self) -> &S {
        &self.cursor
    }

    /// Mutable access to the byte producer, e.g. to collect a stream error.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.cursor
    }
}

impl<'a, S: ByteSource> Iterator for Lexer<'a, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::CodeEnd) {
            None
        } else {
            Some(token)
        }
    }
}
