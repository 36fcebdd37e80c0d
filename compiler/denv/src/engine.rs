//! The configuration engine.

use std::fmt;

use denv_ir::{Map, Token, Value};
use denv_lexer::{lex, Bindings, LexOptions};
use denv_parse::{parse_into, BlockPolicy, Document, NestedStore, ParseContext};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use crate::bind::{bind_fields, Bind, BindError};
use crate::environment::EnvironmentWriter;
use crate::serialize::to_text;

/// Delimiter used when none is given on the command line.
pub const DEFAULT_DELIMITER: &str = ".";

/// A configuration source together with its bindings and parsed namespaces.
///
/// Typical use is construct, [`inject`](Env::inject), [`parse`](Env::parse),
/// then read. Bindings are consulted while tokenizing, so anything injected
/// after `parse` only takes effect on the next `parse` or `load`.
#[derive(Clone, Debug)]
pub struct Env {
    source: String,
    lex: LexOptions,
    bindings: Bindings,
    blocks: BlockPolicy,
    doc: Document,
}

impl Env {
    /// Create an unparsed engine over `source`. Nested mode and extended
    /// identifiers start enabled; opaque blocks are decoded.
    pub fn new(source: impl Into<String>, delimiter: impl Into<String>) -> Self {
        let delimiter = delimiter.into();
        Env {
            source: source.into(),
            lex: LexOptions::new(delimiter.clone()),
            bindings: Bindings::new(),
            blocks: BlockPolicy::default(),
            doc: Document::new(delimiter),
        }
    }

    pub fn delimiter(&self) -> &str {
        self.doc.store.delimiter()
    }

    /// Store delimited keys as nested maps (`true`) or as single keys.
    pub fn set_nested(&mut self, nested: bool) -> &mut Self {
        self.doc.store.set_nested(nested);
        self
    }

    /// Admit any code point at or above U+0080 in identifiers.
    pub fn set_extended_identifiers(&mut self, enabled: bool) -> &mut Self {
        self.lex.extended_identifiers = enabled;
        self
    }

    pub fn set_block_policy(&mut self, policy: BlockPolicy) -> &mut Self {
        self.blocks = policy;
        self
    }

    /// Register variables for `${name}` interpolation.
    pub fn inject<K, V>(&mut self, pairs: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.bindings.extend(pairs);
        self
    }

    /// Tokenize and parse the source, replacing both namespaces.
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn parse(&mut self) -> &mut Self {
        self.doc.clear();
        let tokens = self.tokens();
        self.parse_tokens(&tokens);
        self
    }

    /// Parse additional text over the current namespaces. Keys present in
    /// `text` overwrite existing ones; the rest are kept. The engine's own
    /// source is unchanged.
    #[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
    pub fn load(&mut self, text: &str) -> &mut Self {
        let tokens = lex(text, &self.lex, &self.bindings);
        self.parse_tokens(&tokens);
        self
    }

    fn parse_tokens(&mut self, tokens: &[Token]) {
        let ctx = ParseContext {
            lex: &self.lex,
            resolver: &self.bindings,
            blocks: self.blocks,
        };
        parse_into(tokens, &mut self.doc, &ctx);
    }

    /// Token stream of the source under the current bindings.
    pub fn tokens(&self) -> Vec<Token> {
        lex(&self.source, &self.lex, &self.bindings)
    }

    /// Exports by exact name first, then the delimiter-aware store lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.doc.get(key)
    }

    pub fn flatten(&self) -> Map {
        self.doc.store.flatten()
    }

    pub fn exports(&self) -> &Map {
        &self.doc.exports
    }

    pub fn store(&self) -> &NestedStore {
        &self.doc.store
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Assign stored values to `target`'s fields, each looked up by the key
    /// the field declares. Fields without a key are skipped.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn bind<T>(&self, target: &mut T) -> Result<(), BindError>
    where
        T: Bind + ?Sized,
    {
        bind_fields(self, target, |field| field.key.map(str::to_owned))
    }

    /// Like [`Env::bind`], with `mapper` turning each field name into the
    /// key to look up.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn bind_with<T, F>(&self, target: &mut T, mut mapper: F) -> Result<(), BindError>
    where
        T: Bind + ?Sized,
        F: FnMut(&str) -> Option<String>,
    {
        bind_fields(self, target, |field| mapper(field.name))
    }

    /// Serialize the flattened store, then the exports, one line per entry.
    pub fn to_text(&self) -> String {
        to_text(&self.doc.store, &self.doc.exports)
    }

    /// Write every stored entry to `writer` in canonical text form.
    ///
    /// Exports shadow store entries of the same flattened name, and
    /// `overrides` shadow both. An override only applies to a name that is
    /// already present. Returns the number of variables written.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn materialize_environment<W, K, V>(
        &self,
        writer: &mut W,
        overrides: impl IntoIterator<Item = (K, V)>,
    ) -> usize
    where
        W: EnvironmentWriter + ?Sized,
        K: Into<String>,
        V: Into<String>,
    {
        let overrides: FxHashMap<String, String> = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let mut entries: IndexMap<String, String> = self
            .doc
            .store
            .flatten()
            .into_iter()
            .map(|(key, value)| (key, value.to_string()))
            .collect();
        for (key, value) in &self.doc.exports {
            entries.insert(key.clone(), value.to_string());
        }

        for (key, value) in &mut entries {
            if let Some(shadow) = overrides.get(key) {
                value.clone_from(shadow);
            }
        }

        for (key, value) in &entries {
            writer.set_var(key, value);
        }
        tracing::debug!(count = entries.len(), "materialized");
        entries.len()
    }
}

/// Same as [`Env::to_text`].
impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
