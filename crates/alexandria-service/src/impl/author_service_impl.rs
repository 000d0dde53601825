//! Author search implementation.

use crate::author_service::AuthorService;
use crate::cache_aside::fetch_on_miss;
use crate::dto::AuthorSummary;
use alexandria_client::CatalogClient;
use alexandria_core::{AlexandriaError, AlexandriaResult, Author, AuthorKey};
use alexandria_repository::AuthorRepository;
use async_trait::async_trait;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Cache-aside author search over the catalog store.
///
/// Stored authors are matched by name fragment; only when nothing matches
/// is the upstream catalog consulted, and every author it returns is
/// persisted before the response is produced.
#[derive(Component)]
#[shaku(interface = AuthorService)]
pub struct AuthorServiceImpl {
    #[shaku(inject)]
    author_repository: Arc<dyn AuthorRepository>,
    #[shaku(inject)]
    catalog_client: Arc<dyn CatalogClient>,
}

impl AuthorServiceImpl {
    /// Creates a new author service.
    #[must_use]
    pub fn new(
        author_repository: Arc<dyn AuthorRepository>,
        catalog_client: Arc<dyn CatalogClient>,
    ) -> Self {
        Self {
            author_repository,
            catalog_client,
        }
    }

    /// Searches the upstream catalog and stores every returned author.
    async fn fetch_and_persist(&self, name: &str) -> AlexandriaResult<Vec<Author>> {
        let Some(page) = self.catalog_client.search_authors(name).await? else {
            warn!("Catalog returned no payload for author search {:?}", name);
            return Ok(Vec::new());
        };

        if page.is_empty() {
            debug!("Catalog found no authors for {:?}", name);
            return Ok(Vec::new());
        }

        let mut stored = Vec::with_capacity(page.docs.len());
        for doc in page.docs {
            // Search documents carry bare ids; normalize before storing.
            let key = AuthorKey::new(doc.key).map_err(|e| {
                AlexandriaError::external_service(
                    "openlibrary",
                    format!("author document has an unusable key: {}", e),
                )
            })?;
            let author = Author::new(key, doc.name);
            stored.push(self.author_repository.save(&author).await?);
        }

        info!("Stored {} catalog author(s) for {:?}", stored.len(), name);
        Ok(stored)
    }
}

#[async_trait]
impl AuthorService for AuthorServiceImpl {
    async fn search_authors(&self, name: &str) -> AlexandriaResult<Vec<AuthorSummary>> {
        debug!("Searching authors: {:?}", name);

        let authors = fetch_on_miss(
            "author search",
            self.author_repository.find_by_name_contains(name),
            self.fetch_and_persist(name),
        )
        .await?;

        Ok(authors.iter().map(AuthorSummary::from).collect())
    }
}

impl std::fmt::Debug for AuthorServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorServiceImpl").finish_non_exhaustive()
    }
}
