//! Quoted strings, raw strings, and `${name}` interpolation.
//!
//! A quoted string becomes one or more adjacent fragment tokens. Text
//! between interpolations is flushed as `Text`; each `${name}` becomes a
//! `Variable` (binding found, text is its value) or a `Placeholder` (text is
//! the raw name). Fragment spans are contiguous so the parser can join them
//! back into one value.
//!
//! Escapes: `\n` `\t` `\r` are translated, any other escaped character is
//! kept literally (`\"`, `\\`, `\$`). A string without a closing quote runs
//! to end of input.

use denv_ir::{Span, Token, TokenKind};

use super::Scanner;
use crate::resolver::VariableResolver;

impl<R> Scanner<'_, R>
where
    R: VariableResolver + ?Sized,
{
    pub(super) fn string(&mut self, quote: char) {
        self.cursor.advance(); // consume opening quote
        let emitted_before = self.tokens.len();

        let mut text = String::new();
        let mut fragment_start = self.cursor.pos();

        while let Some(c) = self.cursor.current() {
            if c == quote {
                break;
            }
            match c {
                '\\' => {
                    self.cursor.advance();
                    match self.cursor.advance() {
                        Some('n') => text.push('\n'),
                        Some('t') => text.push('\t'),
                        Some('r') => text.push('\r'),
                        Some(other) => text.push(other),
                        // Trailing backslash at end of input is dropped.
                        None => {}
                    }
                }
                '$' if self.cursor.peek() == Some('{') => {
                    self.flush_text(&mut text, fragment_start);
                    self.variable();
                    fragment_start = self.cursor.pos();
                }
                _ => {
                    text.push(c);
                    self.cursor.advance();
                }
            }
        }

        self.flush_text(&mut text, fragment_start);
        if self.tokens.len() == emitted_before {
            // `""` still assigns a value.
            let here = self.cursor.span_from(fragment_start);
            self.tokens.push(Token::new(TokenKind::Text, "", here));
        }
        self.cursor.advance(); // consume closing quote, if any
    }

    fn flush_text(&mut self, text: &mut String, start: usize) {
        if text.is_empty() {
            return;
        }
        let span = self.cursor.span_from(start);
        self.tokens
            .push(Token::new(TokenKind::Text, std::mem::take(text), span));
    }

    /// `${name}`: the name runs to the next `}` (or end of input).
    fn variable(&mut self) {
        let start = self.cursor.pos();
        self.cursor.advance(); // '$'
        self.cursor.advance(); // '{'
        let name_start = self.cursor.pos();
        let closed = self.cursor.eat_until_byte(b'}');
        let name = self.cursor.slice_from(name_start);
        if closed {
            self.cursor.advance();
        }
        let span = self.cursor.span_from(start);

        let token = match self.resolver.resolve(name) {
            Some(value) => Token::new(TokenKind::Variable, value, span),
            None => {
                tracing::trace!(name, "unresolved variable");
                Token::new(TokenKind::Placeholder, name, span)
            }
        };
        self.tokens.push(token);
    }

    /// Backtick string: verbatim to the next backtick, exactly one `Text`.
    pub(super) fn raw_string(&mut self) {
        self.cursor.advance(); // consume opening backtick
        let start = self.cursor.pos();
        let closed = self.cursor.eat_until_byte(b'`');
        let text = self.cursor.slice_from(start);
        let span: Span = self.cursor.span_from(start);
        if closed {
            self.cursor.advance();
        }
        self.tokens.push(Token::new(TokenKind::Text, text, span));
    }
}

#[cfg(test)]
mod tests;
