//! Request DTOs for the gateway API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for the create and update operations.
///
/// A single-field envelope; a null or missing value is accepted and stored
/// as the empty string.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRequest {
    /// The value to store (nullable)
    #[serde(default)]
    pub value: Option<String>,
}

impl ValueRequest {
    /// Flattens the nullable value into the string the store holds.
    pub fn into_value(self) -> String {
        self.value.unwrap_or_default()
    }
}
