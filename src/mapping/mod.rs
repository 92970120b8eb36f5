//! Mapping Module
//!
//! In-memory key/value storage with no persistence awareness.
//!
//! ## Responsibilities
//! - Insert, overwrite, look up and remove entries by key
//! - Report the prior value on removal
//! - Hand the whole mapping to (and accept it back from) a persistence layer
//!
//! ## Data Structure Choice
//! A plain `HashMap`: insertion order is not significant and keys only need
//! `Hash + Eq`. Every operation is total; there are no error conditions.

mod table;

pub use table::MappingStore;
