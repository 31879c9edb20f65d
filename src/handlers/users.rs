//! # User Handlers
//!
//! Handlers for the user CRUD endpoints. Each handler maps directly onto a
//! store operation: validation happens here, mutation happens in the store.

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::store::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::store::users;
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// Parse a path segment as a user identifier.
///
/// A non-integer segment names no record, so it is reported as the same
/// uniform 404 the lookup itself would produce.
fn parse_user_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::NotFound("User not found".to_string()))
}

/// List all users
///
/// ## Route
/// GET /users
///
/// ## Response
/// ```json
/// {
///   "users": [{"id": 1, "name": "John Doe", "email": "john@example.com"}],
///   "total": 1
/// }
/// ```
pub async fn list_users(State(state): State<AppState>) -> Json<Value> {
    let users = users::list_users(&state.store).await;

    Json(json!({
        "users": users,
        "total": users.len(),
    }))
}

/// Get a single user by id
///
/// ## Route
/// GET /users/{id}
///
/// ## Responses
/// - 200 with the user record
/// - 404 `{"error": "User not found"}` for unknown or non-integer ids
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = users::find_by_id(&state.store, id).await?;

    Ok(Json(user))
}

/// Create a user
///
/// ## Route
/// POST /users
///
/// ## Responses
/// - 201 with the created record
/// - 400 with field-level messages when the name is missing/blank or the
///   email is missing/blank/malformed; the store is untouched in that case
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let (name, email) = validation::validate_create(req)?;
    let user = users::create_user(&state.store, name, email).await;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user
///
/// ## Route
/// PUT /users/{id}
///
/// Updates are partial despite the verb: absent or empty fields keep their
/// stored value. Only a provided, non-empty email is syntax-checked.
///
/// ## Responses
/// - 200 with the updated record
/// - 400 `{"email": "Valid email is required"}` on a malformed email
/// - 404 `{"error": "User not found"}` for unknown ids
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    let id = parse_user_id(&id)?;
    validation::validate_update(&req)?;

    let user = users::update_user(&state.store, id, req.name, req.email).await?;

    Ok(Json(user))
}

/// Delete a user
///
/// ## Route
/// DELETE /users/{id}
///
/// ## Responses
/// - 200 `{"message": "User deleted successfully"}`
/// - 404 `{"error": "User not found"}` when nothing was removed
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let id = parse_user_id(&id)?;

    if users::delete_user(&state.store, id).await {
        Ok(Json(json!({ "message": "User deleted successfully" })))
    } else {
        Err(AppError::NotFound("User not found".to_string()))
    }
}
