//! Store Module
//!
//! Defines the key-value store capability the gateway is polymorphic over,
//! plus the bundled in-memory backend.

mod kv;
mod memory;


// Re-export public types
pub use kv::{KeyValueStore, StoreError, StoreResult};
pub use memory::MemoryStore;

// == Public Constants ==
/// Pattern matching every key in the store
pub const MATCH_ALL: &str = "*";
