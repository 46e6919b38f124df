//! Key-Value Store Capability
//!
//! The gateway talks to its backend exclusively through this trait, so any
//! implementation (in-memory store, networked client, test fake) can be
//! injected without touching the handlers.

use async_trait::async_trait;
use thiserror::Error;

// == Store Error ==
/// Failure talking to the store backend.
///
/// The gateway does not retry; these propagate as an internal server error.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached or refused the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Convenience Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Key-Value Store Trait ==
/// String-keyed store primitives consumed by the gateway.
///
/// Each operation is atomic within the backend. The conditional writes
/// (`set_if_absent`, `set_if_present`) exist so create/update need no
/// separate existence check, closing the check-then-act race window.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns true if the key is present.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Returns the value stored under `key`, or None if absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any existing value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores `value` under `key` only if the key is absent.
    ///
    /// Returns true if the write happened.
    async fn set_if_absent(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Stores `value` under `key` only if the key is present.
    ///
    /// Returns true if the write happened.
    async fn set_if_present(&self, key: &str, value: &str) -> StoreResult<bool>;

    /// Removes `key`. Returns true if the key existed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;

    /// Removes every key in `keys`. Absent keys are ignored.
    async fn delete_many(&self, keys: &[String]) -> StoreResult<()>;

    /// Returns the keys matching `pattern` (`"*"` matches all keys).
    async fn keys(&self, pattern: &str) -> StoreResult<Vec<String>>;
}
