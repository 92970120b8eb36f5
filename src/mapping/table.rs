//! MappingStore implementation
//!
//! HashMap-backed store. At most one value per key at any time.

use std::borrow::Borrow;
use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;

/// In-memory associative container
#[derive(Debug, Clone)]
pub struct MappingStore<K, V> {
    entries: HashMap<K, V>,
}

impl<K, V> MappingStore<K, V>
where
    K: Hash + Eq,
{
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `key`. Always returns `true`.
    pub fn set(&mut self, value: V, key: K) -> bool {
        self.entries.insert(key, value);
        true
    }

    /// Get the value for `key`, if any
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Remove the entry for `key`, returning the removed value
    pub fn delete<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Swap in a whole mapping, discarding the current one
    pub fn replace(&mut self, entries: HashMap<K, V>) {
        self.entries = entries;
    }

    /// Borrow the whole mapping (for serialization)
    pub fn as_map(&self) -> &HashMap<K, V> {
        &self.entries
    }

    /// Consume the store, returning the underlying mapping
    pub fn into_map(self) -> HashMap<K, V> {
        self.entries
    }
}

impl<K, V> Default for MappingStore<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> From<HashMap<K, V>> for MappingStore<K, V> {
    fn from(entries: HashMap<K, V>) -> Self {
        Self { entries }
    }
}
