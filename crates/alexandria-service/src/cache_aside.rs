//! The cache-aside lookup shape shared by both resolvers.

use alexandria_core::AlexandriaResult;
use std::future::Future;
use tracing::debug;

/// Serves a lookup from the local store, falling back to the upstream
/// fetch only when the store has nothing.
///
/// The upstream future is only awaited on a miss, so a store hit performs
/// no upstream work at all. Store errors on the hit path and any error on
/// the miss path propagate unchanged.
pub async fn fetch_on_miss<T, L, U>(label: &str, local: L, upstream: U) -> AlexandriaResult<Vec<T>>
where
    L: Future<Output = AlexandriaResult<Vec<T>>>,
    U: Future<Output = AlexandriaResult<Vec<T>>>,
{
    let stored = local.await?;
    if !stored.is_empty() {
        debug!("{}: {} rows served from the local store", label, stored.len());
        return Ok(stored);
    }

    debug!("{}: local store miss, consulting the catalog", label);
    upstream.await
}
