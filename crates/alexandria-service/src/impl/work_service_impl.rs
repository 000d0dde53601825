//! Work listing implementation with feed reconciliation.

use crate::cache_aside::fetch_on_miss;
use crate::dto::WorkSummary;
use crate::extract::{
    extract_covers, extract_description, extract_key, extract_subjects, extract_title,
};
use crate::work_service::WorkService;
use alexandria_client::CatalogClient;
use alexandria_core::{AlexandriaError, AlexandriaResult, Author, AuthorKey, Work};
use alexandria_repository::{AuthorRepository, WorkRepository};
use async_trait::async_trait;
use serde_json::Value;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cache-aside work listing over the catalog store.
///
/// A local hit answers directly. On a miss the catalog's works feed is
/// reconciled into the store entry by entry: stored works keep their
/// stored form and only gain the missing author link, broken entries are
/// skipped, and the author row itself is created on first sight.
#[derive(Component)]
#[shaku(interface = WorkService)]
pub struct WorkServiceImpl {
    #[shaku(inject)]
    work_repository: Arc<dyn WorkRepository>,
    #[shaku(inject)]
    author_repository: Arc<dyn AuthorRepository>,
    #[shaku(inject)]
    catalog_client: Arc<dyn CatalogClient>,
}

impl WorkServiceImpl {
    /// Creates a new work service.
    #[must_use]
    pub fn new(
        work_repository: Arc<dyn WorkRepository>,
        author_repository: Arc<dyn AuthorRepository>,
        catalog_client: Arc<dyn CatalogClient>,
    ) -> Self {
        Self {
            work_repository,
            author_repository,
            catalog_client,
        }
    }

    /// Fetches the catalog feed for an author and reconciles it into the store.
    async fn fetch_and_reconcile(&self, key: &AuthorKey) -> AlexandriaResult<Vec<Work>> {
        let Some(feed) = self.catalog_client.author_works(key).await? else {
            warn!("Catalog returned no works feed for {}", key);
            return Ok(Vec::new());
        };

        // The author row is created even when the feed carries no entries,
        // so the author is known locally from the first lookup on.
        let author = self.resolve_author(key).await?;

        let Some(entries) = feed.get("entries").and_then(Value::as_array) else {
            warn!("Works feed for {} has no entries array", key);
            return Ok(Vec::new());
        };

        let mut works = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.reconcile_entry(entry, &author).await {
                Ok(Some(work)) => works.push(work),
                Ok(None) => {}
                Err(e) => warn!("Skipping works feed entry for {}: {}", key, e),
            }
        }

        info!("Reconciled {} work(s) for {}", works.len(), key);
        Ok(works)
    }

    /// Returns the stored author, creating the row from the catalog's
    /// detail record when it is missing.
    ///
    /// A failed or empty detail lookup degrades to the sentinel name
    /// instead of failing the listing; store errors still propagate.
    async fn resolve_author(&self, key: &AuthorKey) -> AlexandriaResult<Author> {
        if let Some(author) = self.author_repository.find_by_key(key).await? {
            return Ok(author);
        }

        let name = match self.catalog_client.author_details(key).await {
            Ok(Some(details)) => details
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            Ok(None) => None,
            Err(e) => {
                warn!("Could not fetch author details for {}: {}", key, e);
                None
            }
        };

        let author = match name {
            Some(name) => Author::new(key.clone(), Some(name)),
            None => Author::with_unknown_name(key.clone()),
        };
        self.author_repository.save(&author).await
    }

    /// Turns one feed entry into a stored work linked to the author.
    ///
    /// Entries without a usable key cannot be stored and yield `Ok(None)`.
    /// An already stored work keeps its stored fields; at most the missing
    /// author link is added.
    async fn reconcile_entry(
        &self,
        entry: &Value,
        author: &Author,
    ) -> AlexandriaResult<Option<Work>> {
        let Some(key) = extract_key(entry) else {
            debug!("Works feed entry without a usable key, skipping");
            return Ok(None);
        };

        if let Some(mut existing) = self.work_repository.find_by_key(&key).await? {
            if existing.link_author(author.clone()) {
                return Ok(Some(self.work_repository.save(&existing).await?));
            }
            return Ok(Some(existing));
        }

        let work = Work::builder(key)
            .title(extract_title(entry))
            .description(extract_description(entry))
            .subjects(extract_subjects(entry))
            .covers(extract_covers(entry))
            .author(author.clone())
            .build();

        Ok(Some(self.work_repository.save(&work).await?))
    }
}

#[async_trait]
impl WorkService for WorkServiceImpl {
    async fn works_by_author(&self, author_id: &str) -> AlexandriaResult<Vec<WorkSummary>> {
        let key =
            AuthorKey::new(author_id).map_err(|e| AlexandriaError::validation(e.to_string()))?;

        debug!("Listing works for {}", key);

        let works = fetch_on_miss(
            "works by author",
            self.work_repository.find_by_author_key(&key),
            self.fetch_and_reconcile(&key),
        )
        .await?;

        Ok(works.iter().map(WorkSummary::from).collect())
    }
}

impl std::fmt::Debug for WorkServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkServiceImpl").finish_non_exhaustive()
    }
}
