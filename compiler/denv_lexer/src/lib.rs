//! Lexer for the denv configuration language.
//!
//! Turns source text into a finite `Vec<Token>`. Scanning is single pass and
//! never fails: unknown characters are skipped, unterminated literals run to
//! end of input, and unknown `${name}` references become `Placeholder`
//! tokens.
//!
//! # Dispatch
//!
//! At each position the first matching rule wins:
//!
//! | Character | Scanner |
//! |---|---|
//! | ASCII digit | number (`Number`, or `Text` when it has two or more dots) |
//! | identifier start | key (`Identifier`, or `Export` for `export `) |
//! | `#` | comment (`Hash` + `Comment`, only when non-empty) |
//! | `"` `'` | quoted string with escapes and `${name}` interpolation |
//! | `` ` `` | raw string, one `Text` token |
//! | `[` `]` | `BracketOpen` / `BracketClose` |
//! | `{` | depth-balanced opaque block |
//! | `,` `=` | `Comma` / `Equal` |
//! | whitespace, anything else | skipped |

mod cursor;
mod options;
mod resolver;
mod scanner;

pub use denv_ir::{Span, Token, TokenKind};
pub use options::LexOptions;
pub use resolver::{Bindings, VariableResolver};

use scanner::Scanner;

/// Tokenize `source`, resolving `${name}` references through `resolver`.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex<R>(source: &str, options: &LexOptions, resolver: &R) -> Vec<Token>
where
    R: VariableResolver + ?Sized,
{
    let tokens = Scanner::new(source, options, resolver).scan_all();
    tracing::debug!(count = tokens.len(), "tokenized");
    tokens
}
