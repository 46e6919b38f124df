//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers are stateless
//! translations from REST verbs to store primitives; the store and metrics
//! sink are injected capabilities.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{GatewayError, Result};
use crate::metrics::{GatewayMetrics, OpStatus};
use crate::models::{
    CreateResponse, DeleteAllResponse, DeleteResponse, GetResponse, HealthResponse,
    ListAllResponse, UpdateResponse, ValueRequest,
};
use crate::store::{KeyValueStore, MemoryStore, MATCH_ALL};

/// Application state shared across all handlers.
///
/// The gateway holds no key-value state of its own; every request
/// round-trips to the injected store.
#[derive(Clone)]
pub struct AppState {
    /// Store backend capability
    pub store: Arc<dyn KeyValueStore>,
    /// Operation-counter telemetry
    pub metrics: Arc<GatewayMetrics>,
}

impl AppState {
    /// Creates a new AppState over the given store backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            metrics: Arc::new(GatewayMetrics::new()),
        }
    }

    /// Creates a new AppState backed by the bundled in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

/// Handler for POST /api/redis/:key
///
/// Creates a key-value pair. The write is conditional on the key being
/// absent, so two racing creates cannot both win.
pub async fn create_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<ValueRequest>,
) -> Result<(StatusCode, Json<CreateResponse>)> {
    let value = req.into_value();
    let created = state.store.set_if_absent(&key, &value).await?;

    if !created {
        state.metrics.record_operation("create", OpStatus::Conflict);
        return Err(GatewayError::Conflict(key));
    }

    state.metrics.record_operation("create", OpStatus::Success);
    state.metrics.keys_created.add(1, &[]);

    Ok((StatusCode::CREATED, Json(CreateResponse::new(key))))
}

/// Handler for GET /api/redis/:key
///
/// Retrieves a value from the store by key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state.store.get(&key).await?;

    match value {
        Some(value) => {
            state.metrics.record_operation("get", OpStatus::Success);
            Ok(Json(GetResponse::new(key, value)))
        }
        None => {
            state.metrics.record_operation("get", OpStatus::NotFound);
            Err(GatewayError::missing_on_get(key))
        }
    }
}

/// Handler for GET /api/redis
///
/// Returns every key with its value. Enumeration and the per-key reads are
/// separate store calls; keys deleted in between are simply skipped.
pub async fn list_all_handler(State(state): State<AppState>) -> Result<Json<ListAllResponse>> {
    let keys = state.store.keys(MATCH_ALL).await?;

    let mut data = BTreeMap::new();
    for key in keys {
        if let Some(value) = state.store.get(&key).await? {
            data.insert(key, value);
        }
    }

    state.metrics.record_operation("get_all", OpStatus::Success);

    Ok(Json(ListAllResponse::new(data)))
}

/// Handler for PUT /api/redis/:key
///
/// Overwrites the value of an existing key. The write is conditional on the
/// key being present.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(req): Json<ValueRequest>,
) -> Result<Json<UpdateResponse>> {
    let value = req.into_value();
    let updated = state.store.set_if_present(&key, &value).await?;

    let status = if updated {
        OpStatus::Success
    } else {
        OpStatus::NotFound
    };
    state.metrics.record_operation("update", status);

    if !updated {
        return Err(GatewayError::missing_on_update(key));
    }

    Ok(Json(UpdateResponse::new(key, value)))
}

/// Handler for DELETE /api/redis/:key
///
/// Removes a key. The store reports whether the key existed, which decides
/// between 200 and 404.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let existed = state.store.delete(&key).await?;

    let status = if existed {
        OpStatus::Success
    } else {
        OpStatus::NotFound
    };
    state.metrics.record_operation("delete", status);

    if !existed {
        return Err(GatewayError::missing_on_delete(key));
    }

    state.metrics.keys_deleted.add(1, &[]);

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for DELETE /api/redis
///
/// Removes every key enumerated at the start of the call. Keys inserted
/// concurrently after the snapshot survive and are not counted.
pub async fn delete_all_handler(State(state): State<AppState>) -> Result<Json<DeleteAllResponse>> {
    let keys = state.store.keys(MATCH_ALL).await?;
    let count = keys.len();

    if !keys.is_empty() {
        state.store.delete_many(&keys).await?;
    }

    state.metrics.record_operation("delete_all", OpStatus::Success);
    state.metrics.keys_deleted.add(count as u64, &[]);

    Ok(Json(DeleteAllResponse::new(count)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
