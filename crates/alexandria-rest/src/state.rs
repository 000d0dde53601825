//! Application state for Axum handlers.

use alexandria_service::{AuthorService, WorkService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub author_service: Arc<dyn AuthorService>,
    pub work_service: Arc<dyn WorkService>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        author_service: Arc<dyn AuthorService>,
        work_service: Arc<dyn WorkService>,
    ) -> Self {
        Self {
            author_service,
            work_service,
        }
    }

    /// Resolves the state from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn AuthorService> + HasComponent<dyn WorkService>,
    {
        Self {
            author_service: module.resolve(),
            work_service: module.resolve(),
        }
    }
}
