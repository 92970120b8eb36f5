//! Error types for filekv
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using FileKvError
pub type Result<T> = std::result::Result<T, FileKvError>;

/// Unified error type for filekv operations
///
/// An absent key is never an error: lookups and deletes report it as `None`.
#[derive(Debug, Error)]
pub enum FileKvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Snapshot Format Errors
    // -------------------------------------------------------------------------
    #[error("Invalid snapshot magic: {0:?}")]
    InvalidMagic([u8; 4]),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u16),

    #[error("Snapshot checksum mismatch: expected {expected:#010x}, got {actual:#010x}")]
    ChecksumMismatch { expected: u32, actual: u32 },

    #[error("Snapshot truncated: expected {expected} bytes, found {actual}")]
    Truncated { expected: u64, actual: u64 },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for FileKvError {
    fn from(err: bincode::Error) -> Self {
        FileKvError::Serialization(err.to_string())
    }
}
