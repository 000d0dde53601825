//! Work lookup service trait.

use crate::dto::WorkSummary;
use alexandria_core::{AlexandriaResult, Interface};
use async_trait::async_trait;

/// Work lookups backed by the catalog store.
#[async_trait]
pub trait WorkService: Interface + Send + Sync {
    /// Lists the works linked to an author.
    ///
    /// The identifier may be spelled `/authors/OL1A`, `authors/OL1A` or
    /// `OL1A`; all converge on the same stored author. A blank identifier
    /// is rejected before any I/O happens.
    ///
    /// Serves from the local store when it already holds works for the
    /// author. On a miss the catalog feed is fetched and reconciled into
    /// the store entry by entry: broken entries are skipped, an unknown
    /// author is created from the catalog's detail record (degrading to a
    /// sentinel name when that lookup fails), and already stored works only
    /// gain the missing author link.
    async fn works_by_author(&self, author_id: &str) -> AlexandriaResult<Vec<WorkSummary>>;
}
