//! Hierarchical key/value store addressed by delimiter-split paths.
//!
//! With nested mode on, `DB.HOST` is stored as `{DB: {HOST: ..}}`. Keys that
//! do not contain the delimiter, an empty delimiter, or nested mode off all
//! store the key as one segment. Out of nested mode the store stays one level
//! deep: Map values are written as their flattened entries.

use denv_ir::{Map, Value};
use smallvec::SmallVec;

use crate::stack::ensure_sufficient_stack;

/// A key split into path segments.
pub type Path<'k> = SmallVec<[&'k str; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct NestedStore {
    root: Map,
    delimiter: String,
    nested: bool,
}

impl NestedStore {
    /// An empty store in nested mode.
    pub fn new(delimiter: impl Into<String>) -> Self {
        NestedStore {
            root: Map::new(),
            delimiter: delimiter.into(),
            nested: true,
        }
    }

    /// An empty store with the same delimiter and mode as `self`.
    pub fn empty_like(&self) -> Self {
        NestedStore {
            root: Map::new(),
            delimiter: self.delimiter.clone(),
            nested: self.nested,
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn set_nested(&mut self, nested: bool) {
        self.nested = nested;
    }

    pub fn root(&self) -> &Map {
        &self.root
    }

    pub fn into_root(self) -> Map {
        self.root
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Split `key` into the path it is stored under.
    pub fn split<'k>(&self, key: &'k str) -> Path<'k> {
        if !self.nested || self.delimiter.is_empty() || !key.contains(self.delimiter.as_str()) {
            let mut path = Path::new();
            path.push(key);
            return path;
        }
        key.split(self.delimiter.as_str()).collect()
    }

    /// Store `value` under `key`, split per [`NestedStore::split`].
    ///
    /// Out of nested mode a non-empty Map is stored as its flattened entries
    /// under `key{delimiter}..`, so every entry stays reachable by `get`.
    pub fn insert(&mut self, key: &str, value: Value) {
        match value {
            Value::Map(map) if !self.nested && !map.is_empty() => {
                tracing::trace!(key, entries = map.len(), "storing map as flat keys");
                flatten_into(&map, Some(key), &self.delimiter, &mut self.root);
            }
            value => {
                let path = self.split(key);
                self.set(&path, value);
            }
        }
    }

    /// Look up `key`, split per [`NestedStore::split`].
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.get_path(&self.split(key))
    }

    /// Write `value` at `path`, creating Map nodes for every segment but the
    /// last. A non-Map met on the way is replaced by an empty Map.
    pub fn set(&mut self, path: &[&str], value: Value) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for segment in parents {
            let Some(child) = descend_mut(node, segment) else {
                return;
            };
            node = child;
        }
        node.insert((*last).to_owned(), value);
    }

    /// Read the value at `path`. `None` when a segment is missing or a
    /// non-Map is met before the path ends.
    pub fn get_path(&self, path: &[&str]) -> Option<&Value> {
        let (last, parents) = path.split_last()?;
        let mut node = &self.root;
        for segment in parents {
            node = node.get(*segment)?.as_map()?;
        }
        node.get(*last)
    }

    /// Collapse the hierarchy into one level, joining keys with the
    /// delimiter. Lists and scalars pass through unchanged.
    pub fn flatten(&self) -> Map {
        let mut out = Map::new();
        flatten_into(&self.root, None, &self.delimiter, &mut out);
        out
    }
}

fn descend_mut<'m>(node: &'m mut Map, segment: &str) -> Option<&'m mut Map> {
    let entry = node
        .entry(segment.to_owned())
        .or_insert_with(Value::empty_map);
    if !entry.is_map() {
        tracing::trace!(segment, found = %entry.kind(), "replacing non-map intermediate");
        *entry = Value::empty_map();
    }
    entry.as_map_mut()
}

fn flatten_into(map: &Map, prefix: Option<&str>, delimiter: &str, out: &mut Map) {
    for (key, value) in map {
        let key = match prefix {
            Some(prefix) => format!("{prefix}{delimiter}{key}"),
            None => key.clone(),
        };
        match value {
            Value::Map(child) => ensure_sufficient_stack(|| {
                flatten_into(child, Some(&key), delimiter, out);
            }),
            other => {
                out.insert(key, other.clone());
            }
        }
    }
}
