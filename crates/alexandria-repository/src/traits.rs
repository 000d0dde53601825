//! Repository traits for the catalog store.

use alexandria_core::{AlexandriaResult, Author, AuthorKey, Interface, Work, WorkKey};
use async_trait::async_trait;

/// Data access interface for authors.
#[async_trait]
pub trait AuthorRepository: Interface + Send + Sync {
    /// Finds an author by canonical key.
    async fn find_by_key(&self, key: &AuthorKey) -> AlexandriaResult<Option<Author>>;

    /// Finds authors whose name contains the given fragment, ignoring case.
    ///
    /// An empty fragment matches every named author. Rows are returned in
    /// insertion order (creation timestamp, then key).
    async fn find_by_name_contains(&self, fragment: &str) -> AlexandriaResult<Vec<Author>>;

    /// Inserts or updates an author, returning the persisted row.
    ///
    /// Upserts on the author key: a second save with the same key updates
    /// the name instead of creating a duplicate row.
    async fn save(&self, author: &Author) -> AlexandriaResult<Author>;
}

/// Data access interface for works.
#[async_trait]
pub trait WorkRepository: Interface + Send + Sync {
    /// Finds a work by canonical key, with subjects, covers and authors loaded.
    async fn find_by_key(&self, key: &WorkKey) -> AlexandriaResult<Option<Work>>;

    /// Finds every work linked to the given author, in insertion order.
    async fn find_by_author_key(&self, key: &AuthorKey) -> AlexandriaResult<Vec<Work>>;

    /// Inserts or updates a work together with its child rows.
    ///
    /// Subjects and covers are replaced wholesale from the given entity;
    /// author links only accumulate. Returns the persisted work with all
    /// stored links loaded, which may be a superset of the entity's links.
    async fn save(&self, work: &Work) -> AlexandriaResult<Work>;
}
