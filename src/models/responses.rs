//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::collections::BTreeMap;

use serde::Serialize;

/// Response body for the create operation (POST /api/redis/:key)
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    /// Success message
    pub message: String,
    /// The key that was stored
    pub key: String,
}

impl CreateResponse {
    /// Creates a new CreateResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Key-value pair stored successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the get operation (GET /api/redis/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the list-all operation (GET /api/redis)
#[derive(Debug, Clone, Serialize)]
pub struct ListAllResponse {
    /// Number of entries in `data`
    pub count: usize,
    /// The full key-to-value mapping
    pub data: BTreeMap<String, String>,
}

impl ListAllResponse {
    /// Creates a new ListAllResponse from the collected mapping
    pub fn new(data: BTreeMap<String, String>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// Response body for the update operation (PUT /api/redis/:key)
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    /// Success message
    pub message: String,
    /// The key that was updated
    pub key: String,
    /// The new value
    pub value: String,
}

impl UpdateResponse {
    /// Creates a new UpdateResponse
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            message: "Key-value pair updated successfully".to_string(),
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Response body for the delete operation (DELETE /api/redis/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            message: "Key deleted successfully".to_string(),
            key: key.into(),
        }
    }
}

/// Response body for the delete-all operation (DELETE /api/redis)
///
/// `count` is serialized as a string here while list-all's is numeric.
/// External clients depend on both shapes, so the mismatch stays.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResponse {
    /// Success message
    pub message: String,
    /// Number of keys removed, as a string
    pub count: String,
}

impl DeleteAllResponse {
    /// Creates a new DeleteAllResponse
    pub fn new(count: usize) -> Self {
        Self {
            message: "All keys deleted successfully".to_string(),
            count: count.to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
