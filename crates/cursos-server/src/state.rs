//! Application state with the shared course registry.
//!
//! [`AppState`] wraps the registry in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. Handlers run on multiple runtime worker threads, so every
//! operation on the collection goes through this one lock. The async mutex is
//! awaited without blocking the tokio runtime.

use std::sync::Arc;

use cursos_registry::InMemoryRegistry;

/// Shared application state for the HTTP server.
#[derive(Clone, Default)]
pub struct AppState {
    /// The course collection. Empty at startup, discarded at exit.
    pub registry: Arc<tokio::sync::Mutex<InMemoryRegistry>>,
}

impl AppState {
    /// Creates state around an empty registry.
    pub fn new() -> Self {
        AppState {
            registry: Arc::new(tokio::sync::Mutex::new(InMemoryRegistry::new())),
        }
    }
}
