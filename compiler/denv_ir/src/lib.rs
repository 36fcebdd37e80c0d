//! denv IR - shared data types for the configuration language.
//!
//! This crate holds the types every other stage agrees on:
//! - `Span` for byte ranges in source text
//! - `Token` and `TokenKind` for lexer output
//! - `Value` and `ValueKind`, the tagged union stored by the parser
//!
//! It carries no lexing or parsing logic of its own.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;
mod value;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use value::{Map, Value, ValueKind};
