//! Source location spans.
//!
//! Compact 8-byte byte range into the text a token was scanned from.

use std::fmt;

/// Byte range in source text.
///
/// Layout: 8 bytes total
/// - start: u32 - byte offset from the start of the text
/// - end: u32 - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span for tokens built outside the lexer.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    /// Create a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Create a span from a byte range. Offsets past `u32::MAX` saturate.
    #[inline]
    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let start = u32::try_from(range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(range.end).unwrap_or(u32::MAX);
        Span { start, end }
    }

    /// Whether `other` begins exactly where this span ends.
    ///
    /// Fragments of one quoted string are adjacent; two separate literals
    /// always have at least a quote character between them.
    #[inline]
    pub const fn touches(&self, other: Span) -> bool {
        self.end == other.start
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Span;
    crate::static_assert_size!(Span, 8);
}
