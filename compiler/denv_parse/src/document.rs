//! The two namespaces a parse fills: the nested store and the exports.

use denv_ir::{Map, Value};

use crate::store::NestedStore;

/// Parse output: nested store plus the flat exports namespace.
///
/// Lookups consult the exports first.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub store: NestedStore,
    pub exports: Map,
}

impl Document {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Document::with_store(NestedStore::new(delimiter))
    }

    pub fn with_store(store: NestedStore) -> Self {
        Document {
            store,
            exports: Map::new(),
        }
    }

    /// Exports by exact name, then the delimiter-aware store lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.exports.get(key).or_else(|| self.store.get(key))
    }

    /// Empty both namespaces, keeping the store configuration.
    pub fn clear(&mut self) {
        self.store.clear();
        self.exports.clear();
    }
}
