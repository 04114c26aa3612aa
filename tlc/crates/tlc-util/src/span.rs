//! Source location tracking.
//!
//! A [`Span`] records the byte range a token covers together with the line
//! on which it started. Lines are 1-based, offsets are 0-based byte indices.

use std::fmt;

/// Source location span
///
/// # Examples
///
/// ```
/// use tlc_util::Span;
///
/// let span = Span::new(4, 7, 2);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.line, 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based) where the span starts
    pub line: u32,
}

impl Span {
    /// Dummy span for diagnostics without a location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
    };

    /// Create a new span
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32) -> Self {
        Self { start, end, line }
    }

    /// Create an empty span at a single offset
    #[inline]
    pub const fn point(offset: usize, line: u32) -> Self {
        Self {
            start: offset,
            end: offset,
            line,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.start, self.end)
    }
}
