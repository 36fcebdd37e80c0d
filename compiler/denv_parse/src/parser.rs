//! Pending-key store parser.
//!
//! One left-to-right pass over the token stream. State is a single pending
//! key plus a short look-back stack of identifiers seen without a pending
//! key. Every token kind has a transition; none of them fail.
//!
//! | Token | Transition |
//! |---|---|
//! | `Identifier` | value for the pending key, else pushed on the look-back stack |
//! | `Equal` | bare word next: write it now under the popped name; else the popped name becomes pending |
//! | `Number` | Integer or Float for the pending key |
//! | `Text` `Variable` `Placeholder` | adjacent fragments joined into one String |
//! | `Opaque` | block value per [`BlockPolicy`](crate::BlockPolicy) |
//! | `BracketOpen` | array capture |
//! | `Export` | export declaration: each value in the run is written to the exports namespace |
//! | `BracketClose` `Comma` `Hash` `Comment` | ignored |

use denv_ir::{Span, Token, TokenKind, Value};
use denv_lexer::{LexOptions, VariableResolver};
use smallvec::SmallVec;

use crate::block::{decode_block, BlockPolicy};
use crate::boolean::bare_word_value;
use crate::document::Document;
use crate::stack::ensure_sufficient_stack;

/// Identifiers remembered for a following `=`.
const LOOKBACK: usize = 4;

/// Names an export declaration may list before its value.
const EXPORT_NAMES: usize = 2;

/// Everything a parse needs besides the tokens.
///
/// The lexer options and resolver are reused when an opaque block is decoded
/// as nested statements.
#[derive(Copy, Clone)]
pub struct ParseContext<'a> {
    pub lex: &'a LexOptions,
    pub resolver: &'a dyn VariableResolver,
    pub blocks: BlockPolicy,
}

/// Parse `tokens` into `doc`, overwriting existing keys.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse_into(tokens: &[Token], doc: &mut Document, ctx: &ParseContext<'_>) {
    Parser::new(tokens, doc, ctx).run();
    tracing::debug!(
        entries = doc.store.len(),
        exports = doc.exports.len(),
        "parsed"
    );
}

struct Parser<'t, 'd, 'c> {
    tokens: &'t [Token],
    pos: usize,
    pending: Option<String>,
    recent: SmallVec<[&'t str; LOOKBACK]>,
    doc: &'d mut Document,
    ctx: &'c ParseContext<'c>,
}

impl<'t, 'd, 'c> Parser<'t, 'd, 'c> {
    fn new(tokens: &'t [Token], doc: &'d mut Document, ctx: &'c ParseContext<'c>) -> Self {
        Parser {
            tokens,
            pos: 0,
            pending: None,
            recent: SmallVec::new(),
            doc,
            ctx,
        }
    }

    #[inline]
    fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    #[inline]
    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos + 1)
    }

    #[inline]
    fn bump(&mut self) {
        self.pos += 1;
    }

    fn run(&mut self) {
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::Identifier => {
                    self.bump();
                    match self.pending.take() {
                        Some(key) => self.write(&key, Value::String(token.text.clone())),
                        None => self.remember(&token.text),
                    }
                }
                TokenKind::Equal => self.equal(),
                TokenKind::Number => {
                    self.bump();
                    if let Some(key) = self.pending.take() {
                        self.write(&key, number_value(&token.text));
                    }
                }
                TokenKind::Text | TokenKind::Variable | TokenKind::Placeholder => {
                    let text = self.string();
                    if let Some(key) = self.pending.take() {
                        self.write(&key, Value::String(text));
                    }
                }
                TokenKind::Opaque => {
                    self.bump();
                    if let Some(key) = self.pending.take() {
                        let value = self.block(&token.text);
                        self.write(&key, value);
                    }
                }
                TokenKind::BracketOpen => {
                    self.bump();
                    let items = self.array();
                    if let Some(key) = self.pending.take() {
                        self.write(&key, Value::List(items));
                    }
                }
                TokenKind::Export => self.export(),
                TokenKind::BracketClose | TokenKind::Comma | TokenKind::Hash | TokenKind::Comment => {
                    self.bump();
                }
            }
        }
    }

    fn remember(&mut self, name: &'t str) {
        if self.recent.len() == LOOKBACK {
            self.recent.remove(0);
        }
        self.recent.push(name);
    }

    fn write(&mut self, key: &str, value: Value) {
        tracing::trace!(key, kind = %value.kind(), "store");
        self.doc.store.insert(key, value);
    }

    /// `=`: a bare word on the right is written immediately; anything else
    /// makes the most recent identifier the pending key.
    fn equal(&mut self) {
        match self.peek() {
            Some(next) if next.is(TokenKind::Identifier) => {
                self.pos += 2;
                let name = self.recent.pop();
                if let Some(name) = name.filter(|_| self.pending.is_none()) {
                    self.write(name, bare_word_value(&next.text));
                }
            }
            _ => {
                self.bump();
                if let Some(name) = self.recent.pop() {
                    self.pending = Some(name.to_owned());
                }
            }
        }
    }

    /// Join the run of span-adjacent string fragments at the cursor.
    fn string(&mut self) -> String {
        let mut out = String::new();
        let mut previous: Option<Span> = None;
        while let Some(token) = self.current() {
            if !token.kind.is_string_fragment() {
                break;
            }
            if previous.is_some_and(|span| !span.touches(token.span)) {
                break;
            }
            if token.is(TokenKind::Placeholder) {
                out.push_str("${");
                out.push_str(&token.text);
                out.push('}');
            } else {
                out.push_str(&token.text);
            }
            previous = Some(token.span);
            self.bump();
        }
        out
    }

    fn block(&self, raw: &str) -> Value {
        decode_block(raw, self.ctx, &self.doc.store)
    }

    /// Array entries up to the matching `]`; the `[` is already consumed.
    fn array(&mut self) -> Vec<Value> {
        ensure_sufficient_stack(|| self.array_items())
    }

    fn array_items(&mut self) -> Vec<Value> {
        let mut items = Vec::new();
        while let Some(token) = self.current() {
            match token.kind {
                TokenKind::BracketClose => {
                    self.bump();
                    break;
                }
                TokenKind::BracketOpen => {
                    self.bump();
                    items.push(Value::List(self.array()));
                }
                TokenKind::Comma | TokenKind::Hash | TokenKind::Comment => self.bump(),
                TokenKind::Number => {
                    self.bump();
                    items.push(array_number(&token.text));
                }
                TokenKind::Text | TokenKind::Variable | TokenKind::Placeholder => {
                    items.push(Value::String(self.string()));
                }
                TokenKind::Identifier | TokenKind::Equal | TokenKind::Opaque | TokenKind::Export => {
                    self.bump();
                    items.push(Value::String(token.text.clone()));
                }
            }
        }
        items
    }

    /// `export NAME [NAME2] [=] value...`.
    ///
    /// Of two listed names only the last is used. Every value in the run
    /// that follows is written under it, so the last one wins. A bare word
    /// counts as a value only directly after `=`. The run ends at the first
    /// token that cannot continue it, and the cursor is left there.
    fn export(&mut self) {
        self.bump();

        let mut name = None;
        for _ in 0..EXPORT_NAMES {
            match self.current() {
                Some(token) if token.is(TokenKind::Identifier) => {
                    name = Some(token.text.as_str());
                    self.bump();
                }
                _ => break,
            }
        }
        let Some(name) = name else {
            return;
        };

        let mut after_equal = false;
        while let Some(token) = self.current() {
            let value = match token.kind {
                TokenKind::Equal => {
                    self.bump();
                    after_equal = true;
                    continue;
                }
                TokenKind::Text | TokenKind::Variable | TokenKind::Placeholder => {
                    Value::String(self.string())
                }
                TokenKind::Number => {
                    self.bump();
                    number_value(&token.text)
                }
                TokenKind::Opaque => {
                    self.bump();
                    self.block(&token.text)
                }
                TokenKind::BracketOpen => {
                    self.bump();
                    Value::List(self.array())
                }
                TokenKind::Identifier if after_equal => {
                    self.bump();
                    bare_word_value(&token.text)
                }
                _ => break,
            };
            after_equal = false;
            tracing::trace!(key = name, kind = %value.kind(), "export");
            self.doc.exports.insert(name.to_owned(), value);
        }
    }
}

/// Float when the literal has a `.`, Integer otherwise; text that does not
/// fit either stays a String.
fn number_value(text: &str) -> Value {
    if text.contains('.') {
        text.parse::<f64>()
            .map_or_else(|_| Value::String(text.to_owned()), Value::Float)
    } else {
        text.parse::<i64>()
            .map_or_else(|_| Value::String(text.to_owned()), Value::Integer)
    }
}

fn array_number(text: &str) -> Value {
    text.parse::<f64>()
        .map_or_else(|_| Value::String(text.to_owned()), Value::Float)
}
