//! Token definitions for the Tilde language.
//!
//! A [`Token`] is produced once per scan step and never changes afterwards.
//! Its text is the accumulated lexeme with escape sequences already decoded,
//! or a fixed diagnostic message when the kind is [`TokenKind::Unknown`].

use std::fmt;

use tlc_util::Span;

/// Maximum number of bytes a single lexeme may hold.
pub const MAX_LEXEME_LEN: usize = 256;

/// Text carried by the terminal [`TokenKind::CodeEnd`] token.
pub const CODE_END_TEXT: &str = "EOF";

/// Token categories produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ===== Names and literals =====
    /// Identifier: `[A-Za-z_][A-Za-z0-9_]*` that is not reserved
    Identifier,
    /// Character literal, quotes stripped: `'a'`, `'\n'`
    Character,
    /// String literal, quotes stripped: `"text"`
    String,
    /// Unsigned decimal integer: `42`
    Number,

    // ===== Punctuation and operators =====
    /// One of `( ) [ ] { } ,`
    Delimiter,
    /// One of `+ - * % / ^`, or the word `DIV`
    ArithmeticOperator,
    /// `==`, `or`, `and`
    BooleanOperator,
    /// `=`
    AssignmentOperator,

    // ===== Comments =====
    /// `~` up to the end of the line
    SingleLineComment,
    /// `~/ ... /~`
    BlockComment,

    // ===== Reserved words =====
    /// `if`
    KeywordIf,
    /// `else`
    KeywordElse,
    /// `elseif`
    KeywordElseIf,
    /// `for`
    KeywordFor,
    /// `int`
    KeywordInt,
    /// `decimal`
    KeywordDecimal,
    /// `char`
    KeywordChar,
    /// `string`
    KeywordString,
    /// `boolean`
    KeywordBoolean,
    /// `read`
    KeywordRead,
    /// `write`
    KeywordWrite,
    /// `true`
    True,
    /// `false`
    False,
    /// `null`
    Null,
    /// `do`, a noise word
    Do,

    // ===== Errors and end of input =====
    /// Unrecognized byte or malformed literal; the text says which
    Unknown,
    /// A lexeme longer than the configured limit
    LexemeTooLong,
    /// End of input; repeats forever once reached
    CodeEnd,
}

impl TokenKind {
    /// Returns true for reserved words found in the keyword table.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::KeywordIf
                | TokenKind::KeywordElse
                | TokenKind::KeywordElseIf
                | TokenKind::KeywordFor
                | TokenKind::KeywordInt
                | TokenKind::KeywordDecimal
                | TokenKind::KeywordChar
                | TokenKind::KeywordString
                | TokenKind::KeywordBoolean
                | TokenKind::KeywordRead
                | TokenKind::KeywordWrite
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
                | TokenKind::Do
        )
    }

    /// Returns true for arithmetic, boolean and assignment operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::ArithmeticOperator
                | TokenKind::BooleanOperator
                | TokenKind::AssignmentOperator
        )
    }

    /// Returns true for both comment forms.
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::SingleLineComment | TokenKind::BlockComment)
    }

    /// Returns true for character, string and number literals.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Character | TokenKind::String | TokenKind::Number
        )
    }

    /// Returns true for tokens that report a lexical error.
    pub fn is_error(self) -> bool {
        matches!(self, TokenKind::Unknown | TokenKind::LexemeTooLong)
    }

    /// Stable human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Character => "character literal",
            TokenKind::String => "string literal",
            TokenKind::Number => "number",
            TokenKind::Delimiter => "delimiter",
            TokenKind::ArithmeticOperator => "arithmetic operator",
            TokenKind::BooleanOperator => "boolean operator",
            TokenKind::AssignmentOperator => "assignment operator",
            TokenKind::SingleLineComment => "single-line comment",
            TokenKind::BlockComment => "block comment",
            TokenKind::KeywordIf => "keyword `if`",
            TokenKind::KeywordElse => "keyword `else`",
            TokenKind::KeywordElseIf => "keyword `elseif`",
            TokenKind::KeywordFor => "keyword `for`",
            TokenKind::KeywordInt => "keyword `int`",
            TokenKind::KeywordDecimal => "keyword `decimal`",
            TokenKind::KeywordChar => "keyword `char`",
            TokenKind::KeywordString => "keyword `string`",
            TokenKind::KeywordBoolean => "keyword `boolean`",
            TokenKind::KeywordRead => "keyword `read`",
            TokenKind::KeywordWrite => "keyword `write`",
            TokenKind::True => "reserved word `true`",
            TokenKind::False => "reserved word `false`",
            TokenKind::Null => "reserved word `null`",
            TokenKind::Do => "noise word `do`",
            TokenKind::Unknown => "unknown",
            TokenKind::LexemeTooLong => "lexeme too long",
            TokenKind::CodeEnd => "end of code",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed token.
///
/// # Example
///
/// ```
/// use tlc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("x = 5");
/// assert_eq!(tokens[0].kind(), TokenKind::Identifier);
/// assert_eq!(tokens[0].text(), "x");
/// assert_eq!(tokens[0].line(), 1);
/// assert_eq!(tokens[2].span().start, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: Span,
}

impl Token {
    /// Creates a token; the line is taken from `span`.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The terminal token reported at `span`.
    pub fn code_end(span: Span) -> Self {
        Self::new(TokenKind::CodeEnd, CODE_END_TEXT, span)
    }

    /// Token category.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Lexeme text, or the diagnostic message of an `Unknown` token.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line (1-based) on which the token started.
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Byte range of the token in the source.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Shorthand for `self.kind() == kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}) @ line {}", self.kind, self.text, self.span.line)
    }
}
