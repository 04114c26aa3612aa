//! Reserved multi-character operators spelled like identifiers.
//!
//! `DIV`, `or` and `and` are operators only when they form a whole
//! identifier-shaped run. While scanning, the buffered prefix is checked
//! against this table one byte at a time; as soon as the run can no longer
//! become one of these spellings the scan continues as a plain identifier.

use crate::token::TokenKind;

/// Reserved operator spellings and the kinds they produce.
pub const RESERVED_OPERATORS: [(&str, TokenKind); 3] = [
    ("DIV", TokenKind::ArithmeticOperator),
    ("or", TokenKind::BooleanOperator),
    ("and", TokenKind::BooleanOperator),
];

/// How a buffered prefix relates to the reserved spellings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReservedMatch {
    /// Some spelling is strictly longer and starts with the prefix.
    pub is_prefix: bool,
    /// The kind of the spelling equal to the prefix, if any.
    pub exact: Option<TokenKind>,
}

/// Matches `prefix` against every reserved spelling.
///
/// ```
/// use tlc_lex::lexer::reserved::lookup;
/// use tlc_lex::TokenKind;
///
/// let m = lookup(b"an");
/// assert!(m.is_prefix);
/// assert_eq!(m.exact, None);
/// assert_eq!(lookup(b"or").exact, Some(TokenKind::BooleanOperator));
/// ```
pub fn lookup(prefix: &[u8]) -> ReservedMatch {
    let mut found = ReservedMatch::default();
    for &(spelling, kind) in &RESERVED_OPERATORS {
        let spelling = spelling.as_bytes();
        if spelling == prefix {
            found.exact = Some(kind);
        } else if spelling.len() > prefix.len() && spelling.starts_with(prefix) {
            found.is_prefix = true;
        }
    }
    found
}

/// Returns true if `prefix` followed by `next` is still on a reserved spelling.
pub fn extends(prefix: &[u8], next: u8) -> bool {
    RESERVED_OPERATORS.iter().any(|(spelling, _)| {
        let spelling = spelling.as_bytes();
        spelling.len() > prefix.len()
            && spelling.starts_with(prefix)
            && spelling[prefix.len()] == next
    })
}

/// Returns true if `byte` starts some reserved spelling.
#[inline]
pub fn is_lead(byte: u8) -> bool {
    extends(&[], byte)
}
