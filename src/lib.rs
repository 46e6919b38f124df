//! Redis Gateway - A stateless REST facade over a key-value store
//!
//! Translates CRUD-style HTTP operations into key-value store primitives
//! and emits operation-counter telemetry.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
