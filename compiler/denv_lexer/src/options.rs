//! Lexer configuration.

/// Settings that change how characters are classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Path delimiter. Each of its characters may start and continue a key.
    pub delimiter: String,
    /// Admit any code point at or above U+0080 in keys, so non-Latin
    /// identifiers scan as one word.
    pub extended_identifiers: bool,
}

impl LexOptions {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            extended_identifiers: true,
        }
    }

    #[must_use]
    pub fn with_extended_identifiers(mut self, enabled: bool) -> Self {
        self.extended_identifiers = enabled;
        self
    }

    /// Whether `c` may begin a key.
    #[inline]
    pub fn is_ident_start(&self, c: char) -> bool {
        c.is_alphabetic()
            || c == '_'
            || c == '-'
            || self.delimiter.contains(c)
            || (self.extended_identifiers && !c.is_ascii())
    }

    /// Whether `c` may continue a key.
    #[inline]
    pub fn is_ident_continue(&self, c: char) -> bool {
        c.is_ascii_digit() || self.is_ident_start(c)
    }
}

impl Default for LexOptions {
    fn default() -> Self {
        Self::new(".")
    }
}
