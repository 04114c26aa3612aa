//! Reserved-word classification.
//!
//! Every completed identifier passes through [`classify`]. Matching is
//! exact and case-sensitive, so `If` and `IF` stay identifiers.

use crate::token::TokenKind;

/// Reserved words in table order.
///
/// `DIV` is listed here as well as in the operator chains so that the word
/// classifies the same way whichever path completes it.
pub const KEYWORDS: [(&str, TokenKind); 16] = [
    ("if", TokenKind::KeywordIf),
    ("else", TokenKind::KeywordElse),
    ("elseif", TokenKind::KeywordElseIf),
    ("for", TokenKind::KeywordFor),
    ("int", TokenKind::KeywordInt),
    ("decimal", TokenKind::KeywordDecimal),
    ("char", TokenKind::KeywordChar),
    ("string", TokenKind::KeywordString),
    ("boolean", TokenKind::KeywordBoolean),
    ("read", TokenKind::KeywordRead),
    ("write", TokenKind::KeywordWrite),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("null", TokenKind::Null),
    ("do", TokenKind::Do),
    ("DIV", TokenKind::ArithmeticOperator),
];

/// Looks up `text` in the keyword table.
#[inline]
pub fn keyword_kind(text: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == text)
        .map(|&(_, kind)| kind)
}

/// Classifies a completed identifier lexeme.
///
/// ```
/// use tlc_lex::keyword::classify;
/// use tlc_lex::TokenKind;
///
/// assert_eq!(classify("elseif"), TokenKind::KeywordElseIf);
/// assert_eq!(classify("Else"), TokenKind::Identifier);
/// ```
#[inline]
pub fn classify(text: &str) -> TokenKind {
    keyword_kind(text).unwrap_or(TokenKind::Identifier)
}
