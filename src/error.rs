//! Error types for the gateway
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

// == Gateway Error Enum ==
/// Unified error type for the gateway.
///
/// Exactly two user-facing kinds exist (conflict and not-found); store
/// failures surface as an unmapped internal error.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Key already exists (create on an existing key)
    #[error("Key already exists: {0}")]
    Conflict(String),

    /// Key not found, with an operation-specific detail message
    #[error("Key not found: {key}")]
    NotFound { key: String, detail: &'static str },

    /// Store call failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl GatewayError {
    /// Not-found error for a failed lookup.
    pub fn missing_on_get(key: String) -> Self {
        Self::NotFound {
            key,
            detail: "The specified key does not exist in Redis",
        }
    }

    /// Not-found error for an update against an absent key.
    pub fn missing_on_update(key: String) -> Self {
        Self::NotFound {
            key,
            detail: "Cannot update non-existent key. Use POST to create a new key",
        }
    }

    /// Not-found error for a delete against an absent key.
    pub fn missing_on_delete(key: String) -> Self {
        Self::NotFound {
            key,
            detail: "Cannot delete non-existent key",
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        match self {
            GatewayError::Conflict(key) => (
                StatusCode::CONFLICT,
                Json(json!({
                    "error": "Key already exists",
                    "key": key,
                    "message": "Use PUT to update existing key",
                })),
            )
                .into_response(),
            GatewayError::NotFound { key, detail } => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Key not found",
                    "key": key,
                    "message": detail,
                })),
            )
                .into_response(),
            GatewayError::Store(err) => {
                error!("store error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                    })),
                )
                    .into_response()
            }
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
