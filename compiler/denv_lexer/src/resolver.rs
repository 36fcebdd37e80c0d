//! Variable resolution for `${name}` interpolation.
//!
//! Resolution happens once, while a quoted string is being scanned. A name
//! the resolver does not know becomes a `Placeholder` token carrying the raw
//! name; bindings added afterwards do not touch tokens already produced.

use denv_ir::Value;
use rustc_hash::FxHashMap;

/// Source of values for `${name}` references.
pub trait VariableResolver {
    /// Canonical text of the binding for `name`, if there is one.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> VariableResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Caller-supplied binding table.
///
/// Read-only while a lex pass is running.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    vars: FxHashMap<String, Value>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one binding, returning the previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.vars.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> Extend<(K, V)> for Bindings
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Bindings
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        bindings.extend(iter);
        bindings
    }
}

impl VariableResolver for Bindings {
    fn resolve(&self, name: &str) -> Option<String> {
        self.vars.get(name).map(ToString::to_string)
    }
}
