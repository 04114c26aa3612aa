//! Byte classes recognized by the lexer.
//!
//! The language is strictly 7-bit: every byte at or above `0x80` falls in no
//! class and is reported as an unknown token.

/// Checks if a byte separates tokens.
///
/// Space, tab, newline and carriage return.
///
/// ```
/// use tlc_lex::charclass::is_whitespace;
///
/// assert!(is_whitespace(b' '));
/// assert!(is_whitespace(b'\n'));
/// assert!(!is_whitespace(b'\x0c'));
/// ```
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Checks if a byte can start an identifier: ASCII letter or underscore.
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Checks if a byte can continue an identifier: ASCII letter, digit or underscore.
///
/// ```
/// use tlc_lex::charclass::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'7'));
/// assert!(is_ident_continue(b'_'));
/// assert!(!is_ident_continue(b'('));
/// assert!(!is_ident_continue(0xC3));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Single-byte delimiters: `( ) [ ] { } ,`
#[inline]
pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',')
}

/// Single-byte arithmetic operators: `+ - * % / ^`
#[inline]
pub fn is_arithmetic(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'*' | b'%' | b'/' | b'^')
}

/// Decodes the byte after a backslash inside a literal delimited by `quote`.
///
/// Both literal forms accept `\n`, `\t` and `\\`; each accepts an escaped
/// copy of its own delimiter and nothing else.
///
/// ```
/// use tlc_lex::charclass::decode_escape;
///
/// assert_eq!(decode_escape(b'n', b'"'), Some(b'\n'));
/// assert_eq!(decode_escape(b'"', b'"'), Some(b'"'));
/// assert_eq!(decode_escape(b'"', b'\''), None);
/// assert_eq!(decode_escape(b'r', b'"'), None);
/// ```
#[inline]
pub fn decode_escape(b: u8, quote: u8) -> Option<u8> {
    match b {
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        b'\\' => Some(b'\\'),
        _ if b == quote => Some(quote),
        _ => None,
    }
}
