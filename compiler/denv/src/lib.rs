//! denv: a dotenv-style configuration engine.
//!
//! ```text
//! source text
//!     │  inject(bindings)
//!     ▼
//! lex ──► Vec<Token>            (denv_lexer)
//!     │
//!     ▼
//! parse_into ──► Document       (denv_parse)
//!     │            ├─ NestedStore
//!     │            └─ exports
//!     ▼
//! get / bind / to_text / materialize_environment
//! ```
//!
//! [`Env`] owns the source, the variable bindings, and the parsed document.
//! Parsing never fails; only [`Env::bind`] reports errors.

mod bind;
mod engine;
mod environment;
mod serialize;

use std::sync::Once;

pub use bind::{Bind, BindError, Field, Slot};
pub use denv_ir::{Map, Span, Token, TokenKind, Value, ValueKind};
pub use denv_lexer::{Bindings, LexOptions, VariableResolver};
pub use denv_parse::{normalize_boolean, BlockPolicy, Document, NestedStore};
pub use engine::{Env, DEFAULT_DELIMITER};
pub use environment::{EnvironmentWriter, MemoryEnvironment, ProcessEnvironment};
pub use serialize::{to_text, write_value};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, and nothing after the first call.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
