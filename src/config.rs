//! Configuration for filekv
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FileKvError, Result};

/// Default backing file, relative to the working directory
pub const DEFAULT_PATH: &str = "database.db";

/// Main configuration for a persistent store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// The single backing file holding the full snapshot.
    /// Missing parent directories are created on open.
    pub path: PathBuf,

    /// What to do with an existing backing file on open
    pub open_mode: OpenMode,
}

/// How `PersistentStore::open` treats a backing file that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Load the existing snapshot into memory
    #[default]
    Load,

    /// Overwrite the existing snapshot with an empty mapping (destroys data)
    Truncate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            open_mode: OpenMode::Load,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config is usable before touching the filesystem
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(FileKvError::Config("backing file path is empty".to_string()));
        }
        if self.path.is_dir() {
            return Err(FileKvError::Config(format!(
                "backing file path is a directory: {}",
                self.path.display()
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the open mode
    pub fn open_mode(mut self, mode: OpenMode) -> Self {
        self.config.open_mode = mode;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
