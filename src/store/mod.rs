//! # In-Memory Store
//!
//! This module owns the mutable user collection and identifier allocation:
//! - `models`: data structures (User, request payloads)
//! - `users`: operations on the user collection
//!
//! ## Why one mutex?
//! The record list and the next-id counter must change together — two
//! concurrent creates may never observe the same counter value. Both live
//! behind a single `tokio::sync::Mutex` so every operation is atomic with
//! respect to the others.

pub mod models;
pub mod users;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::store::models::User;

/// Shared handle to the in-memory store.
///
/// Cloning is cheap (it clones the `Arc`), so the handle can be stored in
/// the axum state and cloned per request. All access goes through the
/// functions in [`users`], which lock the inner aggregate for the duration
/// of one operation.
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<Mutex<StoreInner>>,
}

/// The guarded aggregate: collection + counter.
struct StoreInner {
    /// Live records, in insertion order
    users: Vec<User>,

    /// Next identifier to hand out; only ever increments
    next_id: i64,
}

impl UserStore {
    /// Create a store pre-populated with the two seed records.
    ///
    /// The counter starts at 3, one past the highest seeded identifier.
    pub fn new() -> Self {
        let users = vec![
            User::new(1, "John Doe", "john@example.com"),
            User::new(2, "Jane Smith", "jane@example.com"),
        ];

        Self {
            inner: Arc::new(Mutex::new(StoreInner { users, next_id: 3 })),
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
