//! Destinations for [`Env::materialize_environment`](crate::Env::materialize_environment).

use indexmap::IndexMap;

/// Something environment variables can be written to.
pub trait EnvironmentWriter {
    fn set_var(&mut self, key: &str, value: &str);
}

impl<W> EnvironmentWriter for &mut W
where
    W: EnvironmentWriter + ?Sized,
{
    fn set_var(&mut self, key: &str, value: &str) {
        (**self).set_var(key, value);
    }
}

/// The environment of the current process.
///
/// Names that are empty or contain `=` or NUL, and values that contain NUL,
/// cannot be set and are skipped with a warning.
#[derive(Copy, Clone, Debug, Default)]
pub struct ProcessEnvironment;

impl EnvironmentWriter for ProcessEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        if key.is_empty() || key.contains(['=', '\0']) {
            tracing::warn!(key, "skipping environment variable with an invalid name");
            return;
        }
        if value.contains('\0') {
            tracing::warn!(key, "skipping environment variable whose value contains NUL");
            return;
        }
        std::env::set_var(key, value);
    }
}

/// An ordered in-memory environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEnvironment {
    vars: IndexMap<String, String>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Variables in the order they were first written.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvironmentWriter for MemoryEnvironment {
    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests;
