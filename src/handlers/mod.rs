//! # HTTP Request Handlers
//!
//! This module contains all the HTTP route handlers.
//!
//! ## Submodules
//! - `health`: Health check endpoint (for monitoring)
//! - `users`: User CRUD endpoints
//!
//! ## Handler Pattern
//! Handlers are async functions that:
//! 1. Extract data from the request (path params, JSON body)
//! 2. Validate input and call the store
//! 3. Return a response (JSON, status code), with errors mapped to HTTP
//!    responses through [`crate::error::AppError`]

pub mod health;
pub mod users;
