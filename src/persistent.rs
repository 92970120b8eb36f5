//! Persistent Store
//!
//! Keeps a `MappingStore` in sync with a single backing file.
//!
//! ## Choreography
//! - Every operation starts with a **load**: the whole file is decoded and
//!   replaces the in-memory mapping (or the mapping is emptied, with a
//!   warning, when the file is missing).
//! - Every mutating operation ends with a **save**: the whole mapping is
//!   encoded and overwrites the file. If the file vanished since the load,
//!   the save is skipped and the mutation only exists in memory.
//!
//! Nothing is locked. Two stores on the same path race at file granularity
//! and the last writer wins.

use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, OpenMode};
use crate::error::Result;
use crate::mapping::MappingStore;
use crate::snapshot::{BincodeCodec, Codec, SnapshotFile};
use crate::store::KvStore;

/// File-backed key-value store
///
/// Holds the in-memory mapping and the codec by composition, so the
/// serialization format can be swapped with [`PersistentStore::with_codec`].
///
/// # Examples
///
/// ```no_run
/// use filekv::{Config, PersistentStore};
///
/// let config = Config::builder().path("database.db").build();
/// let mut store: PersistentStore<String, i64> = PersistentStore::open(config)?;
///
/// store.set(10, "a".to_string())?;
/// assert_eq!(store.get("a")?, Some(10));
/// # Ok::<(), filekv::FileKvError>(())
/// ```
#[derive(Debug)]
pub struct PersistentStore<K, V, C = BincodeCodec> {
    /// Store configuration
    config: Config,

    /// The backing file
    file: SnapshotFile,

    /// In-memory mapping, replaced wholesale on every load
    mapping: MappingStore<K, V>,

    /// Snapshot format
    codec: C,
}

impl<K, V> PersistentStore<K, V, BincodeCodec>
where
    K: Serialize + DeserializeOwned + Hash + Eq,
    V: Serialize + DeserializeOwned,
{
    /// Open or create a store with the given config, using the bincode codec
    pub fn open(config: Config) -> Result<Self> {
        Self::with_codec(config, BincodeCodec)
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified backing file
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(Config::builder().path(path).build())
    }
}

impl<K, V, C> PersistentStore<K, V, C>
where
    K: Hash + Eq,
    C: Codec<K, V>,
{
    /// Open or create a store with an explicit codec
    ///
    /// On open:
    /// 1. Create missing parent directories
    /// 2. If the backing file is absent, create it holding an empty mapping
    /// 3. If it is present, load it (`OpenMode::Load`) or overwrite it with
    ///    an empty mapping (`OpenMode::Truncate`)
    pub fn with_codec(config: Config, codec: C) -> Result<Self> {
        config.validate()?;

        let file = SnapshotFile::new(&config.path);
        file.ensure_parent_dir()?;

        let mut store = Self {
            config,
            file,
            mapping: MappingStore::new(),
            codec,
        };

        tracing::info!("Initializing store at {}", store.path().display());

        if !store.file.exists() {
            let bytes = store.codec.encode(store.mapping.as_map())?;
            store.file.create(&bytes)?;
            tracing::info!("Created new backing file with an empty mapping");
            return Ok(store);
        }

        match store.config.open_mode {
            OpenMode::Load => {
                store.load()?;
                tracing::info!(
                    "Loaded existing backing file ({} entries)",
                    store.mapping.len()
                );
            }
            OpenMode::Truncate => {
                let bytes = store.codec.encode(store.mapping.as_map())?;
                store.file.overwrite(&bytes)?;
                tracing::info!("Existing backing file reset to an empty mapping");
            }
        }

        Ok(store)
    }

    /// Replace the in-memory mapping with the backing file's contents
    ///
    /// A missing file empties the mapping and logs a warning. A file that
    /// cannot be decoded is an error; memory is left untouched in that case.
    pub fn load(&mut self) -> Result<()> {
        if !self.file.exists() {
            self.mapping.clear();
            tracing::warn!(
                "Backing file {} not found, continuing with an empty mapping",
                self.path().display()
            );
            return Ok(());
        }

        let bytes = self.file.read_all()?;
        let entries = self.codec.decode(&bytes)?;
        self.mapping.replace(entries);

        tracing::debug!("Loaded {} entries from backing file", self.mapping.len());
        Ok(())
    }

    /// Overwrite the backing file with the whole in-memory mapping
    ///
    /// Skipped when the backing file no longer exists.
    pub fn save(&self) -> Result<()> {
        if !self.file.exists() {
            tracing::debug!("Backing file missing, save skipped");
            return Ok(());
        }

        let bytes = self.codec.encode(self.mapping.as_map())?;
        self.file.overwrite(&bytes)?;

        tracing::debug!(
            "Saved {} entries ({} bytes) to backing file",
            self.mapping.len(),
            bytes.len()
        );
        Ok(())
    }

    /// Insert or overwrite `key`. Returns `true` on success.
    ///
    /// Load → set → save.
    pub fn set(&mut self, value: V, key: K) -> Result<bool> {
        self.load()?;
        let ok = self.mapping.set(value, key);
        self.save()?;
        Ok(ok)
    }

    /// Look up `key`; `None` when absent
    ///
    /// Load → get. Reads never save.
    pub fn get<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
        V: Clone,
    {
        self.load()?;
        let value = self.mapping.get(key).cloned();
        if value.is_none() {
            tracing::debug!(?key, "Key not found");
        }
        Ok(value)
    }

    /// Remove `key`, returning the prior value; `None` when absent
    ///
    /// Load → delete → save.
    pub fn delete<Q>(&mut self, key: &Q) -> Result<Option<V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.load()?;
        let removed = self.mapping.delete(key);
        if removed.is_none() {
            tracing::debug!(?key, "Key not found, nothing deleted");
        }
        self.save()?;
        Ok(removed)
    }

    /// Empty the store and write the empty mapping, creating the file if
    /// it is missing
    pub fn reset(&mut self) -> Result<()> {
        self.mapping.clear();
        let bytes = self.codec.encode(self.mapping.as_map())?;
        self.file.overwrite(&bytes)?;
        tracing::info!("Store reset to an empty mapping");
        Ok(())
    }

    /// Number of entries currently persisted
    pub fn len(&mut self) -> Result<usize> {
        self.load()?;
        Ok(self.mapping.len())
    }

    pub fn is_empty(&mut self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// All keys currently persisted, in arbitrary order
    pub fn keys(&mut self) -> Result<Vec<K>>
    where
        K: Clone,
    {
        self.load()?;
        Ok(self.mapping.iter().map(|(key, _)| key.clone()).collect())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The in-memory mapping as of the last operation, without reloading
    pub fn mapping(&self) -> &MappingStore<K, V> {
        &self.mapping
    }
}

impl<K, V, C> KvStore<K, V> for PersistentStore<K, V, C>
where
    K: Hash + Eq + Debug,
    V: Clone,
    C: Codec<K, V>,
{
    fn set(&mut self, value: V, key: K) -> Result<bool> {
        PersistentStore::set(self, value, key)
    }

    fn get(&mut self, key: &K) -> Result<Option<V>> {
        PersistentStore::get(self, key)
    }

    fn delete(&mut self, key: &K) -> Result<Option<V>> {
        PersistentStore::delete(self, key)
    }
}
