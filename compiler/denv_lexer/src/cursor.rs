//! Character cursor over source text.
//!
//! The cursor walks Unicode scalar values left to right and reports byte
//! offsets. The position is always on a character boundary: `advance` moves
//! by the current character's UTF-8 width, and the byte searches only stop
//! on ASCII bytes, which never occur inside a multi-byte sequence.

use denv_ir::Span;
use memchr::{memchr, memchr2};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// The character at the current position, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the current one.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Consume the current character and return it.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Advance to the next `\n` or `\r`, or to end of input.
    ///
    /// The line terminator itself is not consumed.
    pub fn eat_until_line_end(&mut self) {
        match memchr2(b'\n', b'\r', self.rest().as_bytes()) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }

    /// Advance to the next occurrence of the ASCII byte `needle`.
    ///
    /// Returns `false` (and stops at end of input) when there is none.
    /// The needle itself is not consumed.
    pub fn eat_until_byte(&mut self, needle: u8) -> bool {
        debug_assert!(needle.is_ascii(), "needle must be ASCII");
        match memchr(needle, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset;
                true
            }
            None => {
                self.pos = self.src.len();
                false
            }
        }
    }

    /// Source text between two byte offsets.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.src[start..end]
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Span from `start` to the current position.
    #[inline]
    pub fn span_from(&self, start: usize) -> Span {
        Span::from_range(start..self.pos)
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}

#[cfg(test)]
mod tests;
