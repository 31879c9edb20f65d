//! # Application State
//!
//! This module defines the shared state that's accessible to all request
//! handlers. Axum clones the state for each request, which is cheap because
//! the store handle is an `Arc` internally.

use crate::store::UserStore;

/// Shared application state
///
/// Holds the single [`UserStore`] every handler operates on. Constructed
/// explicitly at startup and handed to the router — there is no implicit
/// wiring container.
#[derive(Clone)]
pub struct AppState {
    /// The in-memory user store
    pub store: UserStore,
}

impl AppState {
    /// Initialize application state with a freshly seeded store.
    pub fn new() -> Self {
        AppState {
            store: UserStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
