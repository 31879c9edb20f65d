//! # Data Models
//!
//! This module defines the user record and the request payloads accepted by
//! the API. All of them serialize to/from JSON with serde.
//!
//! ## Key Concepts
//! - **User**: a live record owned by the store
//! - **Request DTOs**: payload shapes for create/update, validated explicitly
//!   before they reach the store

use serde::{Deserialize, Serialize};

/// A user record.
///
/// ## Wire shape
/// ```json
/// {
///   "id": 1,
///   "name": "John Doe",
///   "email": "john@example.com"
/// }
/// ```
///
/// Identifiers are allocated by the store's counter, are unique across all
/// live records, and are never reused after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after creation
    pub id: i64,

    /// Display name, non-empty
    pub name: String,

    /// Email address
    pub email: String,
}

impl User {
    /// Create a record with an already-allocated identifier.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for `POST /users`.
///
/// Both fields are optional here so a missing field surfaces as a
/// field-level validation error instead of a body-deserialization rejection.
/// [`crate::validation::validate_create`] enforces presence and format.
///
/// ## Example JSON
/// ```json
/// {
///   "name": "Test User",
///   "email": "test@example.com"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Payload for `PUT /users/{id}`.
///
/// Updates are partial: an absent or empty field leaves the stored value
/// unchanged. Only a provided, non-empty email is syntax-checked.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}
