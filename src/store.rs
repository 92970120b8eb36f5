//! Store contract
//!
//! The surface collaborators (CLI, tests, benchmarks) call, implemented by
//! both the in-memory and the file-backed store.

use std::hash::Hash;

use crate::error::Result;
use crate::mapping::MappingStore;

/// Key-value store contract
///
/// `set` takes the value first and the key second.
pub trait KvStore<K, V> {
    /// Insert or overwrite `key`. Returns `true` on success.
    fn set(&mut self, value: V, key: K) -> Result<bool>;

    /// Look up `key`; `None` when absent
    fn get(&mut self, key: &K) -> Result<Option<V>>;

    /// Remove `key`, returning the prior value; `None` when absent
    fn delete(&mut self, key: &K) -> Result<Option<V>>;
}

impl<K, V> KvStore<K, V> for MappingStore<K, V>
where
    K: Hash + Eq,
    V: Clone,
{
    fn set(&mut self, value: V, key: K) -> Result<bool> {
        Ok(MappingStore::set(self, value, key))
    }

    fn get(&mut self, key: &K) -> Result<Option<V>> {
        Ok(MappingStore::get(self, key).cloned())
    }

    fn delete(&mut self, key: &K) -> Result<Option<V>> {
        Ok(MappingStore::delete(self, key))
    }
}
