//! Snapshot File
//!
//! The single backing file. Every call opens and closes its own handle;
//! nothing is held between operations and nothing is locked.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Handle on the backing file's path
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file is currently present
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create missing parent directories
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Create the file and write `bytes` to it. Fails if it already exists.
    pub fn create(&self, bytes: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        Self::write_to(file, bytes)
    }

    /// Replace the file's contents with `bytes`, creating it if needed.
    ///
    /// Not atomic: an interrupted write leaves a truncated file behind.
    pub fn overwrite(&self, bytes: &[u8]) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        Self::write_to(file, bytes)
    }

    /// Read the whole file
    pub fn read_all(&self) -> Result<Vec<u8>> {
        let mut file = File::open(&self.path)?;
        let mut buf = Vec::with_capacity(file.metadata()?.len() as usize);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }

    /// Delete the file
    pub fn remove(&self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }

    fn write_to(file: File, bytes: &[u8]) -> Result<()> {
        let mut writer = BufWriter::new(file);
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }
}
