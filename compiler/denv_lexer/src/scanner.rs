//! Main dispatch and the single-token scanners.
//!
//! Each arm of [`Scanner::next_token`] calls a focused method that advances
//! the cursor and pushes zero or more tokens. No arm can fail: characters the
//! format does not use are consumed and dropped.

mod block;
mod string;

use denv_ir::{Token, TokenKind};

use crate::cursor::Cursor;
use crate::options::LexOptions;
use crate::resolver::VariableResolver;

/// The word that introduces an export declaration.
const EXPORT_KEYWORD: &str = "export";

pub(crate) struct Scanner<'a, R: ?Sized> {
    cursor: Cursor<'a>,
    options: &'a LexOptions,
    resolver: &'a R,
    tokens: Vec<Token>,
}

impl<'a, R> Scanner<'a, R>
where
    R: VariableResolver + ?Sized,
{
    pub(crate) fn new(source: &'a str, options: &'a LexOptions, resolver: &'a R) -> Self {
        Self {
            cursor: Cursor::new(source),
            options,
            resolver,
            tokens: Vec::new(),
        }
    }

    /// Scan to end of input and return every token produced.
    pub(crate) fn scan_all(mut self) -> Vec<Token> {
        while !self.cursor.is_eof() {
            self.next_token();
        }
        self.tokens
    }

    fn next_token(&mut self) {
        let Some(c) = self.cursor.current() else {
            return;
        };
        match c {
            '0'..='9' => self.number(),
            c if self.options.is_ident_start(c) => self.key(),
            '#' => self.comment(),
            '"' | '\'' => self.string(c),
            '`' => self.raw_string(),
            '[' => self.single(TokenKind::BracketOpen),
            ']' => self.single(TokenKind::BracketClose),
            '{' => self.block(),
            ',' => self.single(TokenKind::Comma),
            '=' => self.single(TokenKind::Equal),
            ' ' | '\t' | '\r' | '\n' => self.skip(),
            // Unknown syntax is dropped, never reported.
            _ => self.skip(),
        }
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<String>, start: usize) {
        let span = self.cursor.span_from(start);
        self.tokens.push(Token::new(kind, text, span));
    }

    fn skip(&mut self) {
        self.cursor.advance();
    }

    /// Single-character token: advance one character and emit `kind`.
    fn single(&mut self, kind: TokenKind) {
        let start = self.cursor.pos();
        self.cursor.advance();
        let text = self.cursor.slice_from(start);
        self.push(kind, text, start);
    }

    // ─── Numbers ──────────────────────────────────────────────────

    /// Digits and dots. Two or more dots make the run plain text
    /// (`1.2.3` is a version string, not a float).
    fn number(&mut self) {
        let start = self.cursor.pos();
        let mut dots = 0usize;
        self.cursor.eat_while(|c| {
            if c == '.' {
                dots += 1;
                true
            } else {
                c.is_ascii_digit()
            }
        });
        let text = self.cursor.slice_from(start);
        let kind = if dots > 1 {
            TokenKind::Text
        } else {
            TokenKind::Number
        };
        self.push(kind, text, start);
    }

    // ─── Keys ─────────────────────────────────────────────────────

    fn key(&mut self) {
        let start = self.cursor.pos();
        let options = self.options;
        self.cursor.eat_while(|c| options.is_ident_continue(c));
        let text = self.cursor.slice_from(start);
        let kind = if text == EXPORT_KEYWORD && matches!(self.cursor.current(), Some(' ' | '\t')) {
            TokenKind::Export
        } else {
            TokenKind::Identifier
        };
        self.push(kind, text, start);
    }

    // ─── Comments ─────────────────────────────────────────────────

    /// `#` to end of line. Emits `Hash` + `Comment` only when the trimmed
    /// text is non-empty; the line terminator is left for the main loop.
    fn comment(&mut self) {
        let hash_start = self.cursor.pos();
        self.cursor.advance(); // consume '#'
        let hash_span = self.cursor.span_from(hash_start);

        let start = self.cursor.pos();
        self.cursor.eat_until_line_end();
        let text = self.cursor.slice_from(start).trim();
        if text.is_empty() {
            return;
        }
        self.tokens.push(Token::new(TokenKind::Hash, "#", hash_span));
        self.push(TokenKind::Comment, text, start);
    }
}
