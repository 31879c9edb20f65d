//! # Error Handling
//!
//! This module defines the application error type and converts it into HTTP
//! responses, so handlers can return `AppResult<T>` and let axum build the
//! error payload.
//!
//! ## Error taxonomy
//! - `NotFound` → 404, body `{"error": "..."}`
//! - `Validation` → 400, body keyed by the failing field, e.g.
//!   `{"name": "Name is required"}`
//!
//! Anything else (malformed JSON bodies, transport failures) surfaces as the
//! framework's own rejection and is not modeled here.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Field name → message, collected by the validation functions.
pub type ValidationErrors = BTreeMap<String, String>;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// No record matches the given identifier (404)
    #[error("not found: {0}")]
    NotFound(String),

    /// Request input failed required-field or format checks (400)
    #[error("validation failed")]
    Validation(ValidationErrors),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            AppError::Validation(errors) => {
                tracing::debug!(?errors, "request failed validation");
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
        }
    }
}

/// Convenience alias so handlers can write `AppResult<Json<User>>`.
pub type AppResult<T> = Result<T, AppError>;
