//! Ordered prefix registry keyed by command path.
//!
//! [`PrefixRegistry`] maps command paths to values and answers the three
//! questions dispatch needs: exact lookup, the longest registered key that
//! prefixes a query, and every key under a given prefix. Keys are kept in
//! lexicographic order, so prefix walks visit entries sorted.
//!
//! Entries are never removed. The registry only grows while it is being
//! built; afterwards it is shared read-only.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Bound, ControlFlow};

use crate::path;

/// An ordered map from command path to value with prefix queries.
#[derive(Debug, Clone)]
pub struct PrefixRegistry<V> {
    entries: BTreeMap<String, V>,
}

impl<V> Default for PrefixRegistry<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> PrefixRegistry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `path`, returning the value it replaced.
    ///
    /// The last write for a duplicate path wins.
    pub fn insert(&mut self, path: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(path.into(), value)
    }

    /// Exact lookup.
    pub fn get(&self, path: &str) -> Option<&V> {
        self.entries.get(path)
    }

    /// Returns true if `path` is a registered key.
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the longest registered key that is a prefix of `query`.
    ///
    /// Matching is character-level: `"foo"` is returned for the query
    /// `"foobar"` if it is registered. Callers that need whole-segment
    /// matches check the boundary with [`path::is_segment_prefix`].
    pub fn longest_prefix(&self, query: &str) -> Option<(&str, &V)> {
        (0..=query.len())
            .rev()
            .filter(|&end| query.is_char_boundary(end))
            .find_map(|end| self.entries.get_key_value(&query[..end]))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates every key that starts with `prefix`, in key order.
    pub fn iter_prefix<'a>(&'a self, prefix: &str) -> impl Iterator<Item = (&'a str, &'a V)> + 'a {
        let owned = prefix.to_string();
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(key, _)| key.starts_with(owned.as_str()))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Visits every key that starts with `prefix` until `visit` breaks.
    pub fn walk_prefix<F>(&self, prefix: &str, mut visit: F)
    where
        F: FnMut(&str, &V) -> ControlFlow<()>,
    {
        for (key, value) in self.iter_prefix(prefix) {
            if visit(key, value).is_break() {
                break;
            }
        }
    }

    /// Visits every key until `visit` breaks.
    pub fn walk<F>(&self, visit: F)
    where
        F: FnMut(&str, &V) -> ControlFlow<()>,
    {
        self.walk_prefix("", visit)
    }

    /// Iterates all registered keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Inserts a value for every ancestor path that has no entry.
    ///
    /// Runs as a post-pass until no key has a missing ancestor. `make` is
    /// called once per inserted path. Returns the inserted paths in order.
    pub fn fill_ancestors<F>(&mut self, mut make: F) -> Vec<String>
    where
        F: FnMut(&str) -> V,
    {
        let mut inserted = Vec::new();
        loop {
            let missing: BTreeSet<String> = self
                .entries
                .keys()
                .flat_map(|key| path::ancestors(key))
                .filter(|ancestor| !self.entries.contains_key(*ancestor))
                .map(str::to_string)
                .collect();

            if missing.is_empty() {
                break;
            }

            for ancestor in missing {
                let value = make(&ancestor);
                self.entries.insert(ancestor.clone(), value);
                inserted.push(ancestor);
            }
        }
        inserted
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for PrefixRegistry<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (key, value) in iter {
            registry.insert(key, value);
        }
        registry
    }
}
