//! # Health Check Handler
//!
//! Simple endpoint to check if the server is running.
//! Used by load balancers and monitoring systems.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Health check endpoint
///
/// ## Route
/// GET /health
///
/// ## Response
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": 1733760000,
///   "service": "user-api-server"
/// }
/// ```
///
/// The timestamp is the current time in epoch seconds. This handler never
/// fails, so it returns `Json<Value>` directly instead of `AppResult`.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "service": "user-api-server"
    }))
}
