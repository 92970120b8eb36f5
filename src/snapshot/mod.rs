//! Snapshot Module
//!
//! Whole-structure serialization of a mapping and the single backing file
//! that holds it.
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (18 bytes)                                            │
//! │   Magic: "FKV1" (4) | Version: u16 (2) | CRC32: u32 (4)      │
//! │   PayloadLen: u64 (8)                                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Payload (PayloadLen bytes)                                   │
//! │   bincode-encoded HashMap<K, V>                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. The CRC covers the payload only.
//! A snapshot is always read and written in one piece.

mod codec;
mod file;

use std::collections::HashMap;

use crate::error::Result;

pub use codec::BincodeCodec;
pub use file::SnapshotFile;

// =============================================================================
// Shared Constants
// =============================================================================

/// Magic bytes identifying a filekv snapshot
pub const MAGIC: &[u8; 4] = b"FKV1";

/// Current snapshot format version
pub const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + CRC (4) + PayloadLen (8) = 18 bytes
pub const HEADER_SIZE: usize = 18;

// =============================================================================
// Codec Trait
// =============================================================================

/// Turns a whole mapping into bytes and back.
///
/// `decode` must reject unreadable or foreign content with an error; it never
/// returns a partial mapping.
pub trait Codec<K, V> {
    /// Serialize the entire mapping
    fn encode(&self, entries: &HashMap<K, V>) -> Result<Vec<u8>>;

    /// Deserialize an entire mapping
    fn decode(&self, bytes: &[u8]) -> Result<HashMap<K, V>>;
}
