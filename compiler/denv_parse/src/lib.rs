//! Parser for the denv configuration language.
//!
//! Consumes the lexer's token stream and fills a [`Document`]: a
//! [`NestedStore`] addressed by delimiter-split keys, plus a flat exports
//! namespace written by `export` declarations. Parsing never fails; tokens
//! that do not fit the current state are ignored.

mod block;
mod boolean;
mod document;
mod parser;
mod stack;
mod store;

pub use block::BlockPolicy;
pub use boolean::{bare_word_value, normalize_boolean};
pub use document::Document;
pub use parser::{parse_into, ParseContext};
pub use stack::ensure_sufficient_stack;
pub use store::{NestedStore, Path};

/// Tokenize `source` with the context's lexer options and resolver, then
/// parse it into `doc`.
pub fn parse_source(source: &str, doc: &mut Document, ctx: &ParseContext<'_>) {
    let tokens = denv_lexer::lex(source, ctx.lex, ctx.resolver);
    parse_into(&tokens, doc, ctx);
}
