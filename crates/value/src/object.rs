//! Object (key-value map) type.
//!
//! Insertion order is preserved and observable through iteration, which
//! is what gives declared-field order its meaning in the blueprint layer.
//! Equality ignores insertion order; hashing is commutative so it agrees
//! with equality.

use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

use crate::Value;

/// Insertion-ordered map from string keys to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Object {
    inner: IndexMap<String, Value>,
}

impl Object {
    /// Create an empty object.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Create an empty object with capacity for `n` entries.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            inner: IndexMap::with_capacity(n),
        }
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Check if a key exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    /// Insert a key-value pair, returning the previous value if any.
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.shift_remove(key)
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterate over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.inner.values()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Object {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl From<IndexMap<String, Value>> for Object {
    fn from(inner: IndexMap<String, Value>) -> Self {
        Self { inner }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

// Equality is order-insensitive (IndexMap compares by lookup), so the
// hash has to be commutative over entries to stay consistent with it.
impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.len().hash(state);
        let mut acc: u64 = 0;
        for (key, value) in &self.inner {
            let mut entry = std::collections::hash_map::DefaultHasher::new();
            key.hash(&mut entry);
            value.hash(&mut entry);
            acc ^= entry.finish();
        }
        acc.hash(state);
    }
}
