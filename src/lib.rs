//! # filekv
//!
//! A small persistent key-value store with:
//! - An in-memory mapping with get/set/delete
//! - Whole-file snapshots: load before every operation, save after every write
//! - A checksummed, versioned binary snapshot format
//! - A pluggable codec so the persistence format can be swapped
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  KvStore (set / get / delete)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    PersistentStore                           │
//! │           (load → operate → save, every call)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │MappingStore │          │    Codec    │
//!   │  (HashMap)  │          │  (bincode)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │SnapshotFile │
//!                           │ (one file)  │
//!                           └─────────────┘
//! ```
//!
//! There is no locking and no atomic write: a store is meant to be used by
//! one process and one thread at a time.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod mapping;
pub mod snapshot;
pub mod store;
pub mod persistent;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FileKvError, Result};
pub use config::{Config, OpenMode};
pub use mapping::MappingStore;
pub use persistent::PersistentStore;
pub use snapshot::{BincodeCodec, Codec};
pub use store::KvStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of filekv
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
