//! Token types produced by the lexer.

use std::fmt;

use super::Span;

/// What a token is.
///
/// There is no end-of-input kind: the lexer returns a finite `Vec<Token>`
/// and consumers stop when it is exhausted.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// String content: a quoted/raw literal or a fragment of one, or a
    /// malformed number such as `1.2.3`.
    Text,
    /// Digits with at most one `.`.
    Number,
    /// A bare word: key names and unquoted right-hand sides.
    Identifier,
    /// A resolved `${name}` reference; the text is the binding's value.
    Variable,
    /// An unresolved `${name}` reference; the text is the raw name.
    Placeholder,
    /// `=`
    Equal,
    /// Trimmed text following `#`, always preceded by a `Hash` token.
    Comment,
    /// `,`
    Comma,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// A depth-balanced `{...}` span, verbatim.
    Opaque,
    /// The `export` keyword.
    Export,
    /// `#` introducing a non-empty comment.
    Hash,
}

impl TokenKind {
    /// Whether this token is one piece of a quoted string literal.
    #[inline]
    pub fn is_string_fragment(self) -> bool {
        matches!(
            self,
            TokenKind::Text | TokenKind::Variable | TokenKind::Placeholder
        )
    }

    /// Short display name used by token dumps.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::Variable => "Variable",
            TokenKind::Placeholder => "Placeholder",
            TokenKind::Equal => "Equal",
            TokenKind::Comment => "Comment",
            TokenKind::Comma => "Comma",
            TokenKind::BracketOpen => "BracketOpen",
            TokenKind::BracketClose => "BracketClose",
            TokenKind::Opaque => "Opaque",
            TokenKind::Export => "Export",
            TokenKind::Hash => "Hash",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: its kind, its literal text, and where it came from.
///
/// Immutable once produced.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create a token with a dummy span, for tests and synthesized input.
    pub fn dummy(kind: TokenKind, text: impl Into<String>) -> Self {
        Token::new(kind, text, Span::DUMMY)
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} @ {}", self.kind, self.text, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
