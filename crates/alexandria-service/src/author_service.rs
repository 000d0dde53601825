//! Author lookup service trait.

use crate::dto::AuthorSummary;
use alexandria_core::{AlexandriaResult, Interface};
use async_trait::async_trait;

/// Author lookups backed by the catalog store.
#[async_trait]
pub trait AuthorService: Interface + Send + Sync {
    /// Searches authors by free-text name.
    ///
    /// Serves from the local store when any stored author's name contains
    /// the query (case-insensitively). On a miss the upstream catalog is
    /// searched and every returned author is persisted before the response
    /// is produced; a fetch or persist failure fails the whole search. Zero
    /// upstream matches yield an empty list, not an error.
    async fn search_authors(&self, name: &str) -> AlexandriaResult<Vec<AuthorSummary>>;
}
