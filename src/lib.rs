//! user-api-server — minimal REST API over an in-memory user collection.
//!
//! Exposes the module tree and the router constructor so integration tests
//! can drive the service in-process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod store;
pub mod validation;

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::health::health_check;
use crate::handlers::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::state::AppState;

/// Build the application router.
///
/// Routes:
/// - `GET /health`
/// - `GET /users`, `POST /users`
/// - `GET|PUT|DELETE /users/{id}`
///
/// The router carries a permissive CORS layer and HTTP request tracing.
pub fn app(state: AppState) -> Router {
    // In production, restrict CORS to specific origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
