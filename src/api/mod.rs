//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `POST /api/redis/:key` - Create a key-value pair (409 if it exists)
//! - `GET /api/redis/:key` - Retrieve a value by key
//! - `GET /api/redis` - List all key-value pairs
//! - `PUT /api/redis/:key` - Update an existing key (404 if absent)
//! - `DELETE /api/redis/:key` - Delete a key
//! - `DELETE /api/redis` - Delete all keys
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
