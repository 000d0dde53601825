//! Dependency injection module using Shaku.
//!
//! `AppModule` wires the full stack for a single-process deployment:
//! the SQLite pool, both store repositories, the OpenLibrary client,
//! and the lookup services on top of them.

use alexandria_client::{OpenLibraryClient, OpenLibraryClientParameters};
use alexandria_config::CatalogConfig;
use alexandria_core::AlexandriaResult;
use alexandria_repository::{
    AuthorRepository, DatabasePool, DatabasePoolInterface, DatabasePoolParameters,
    SqliteAuthorRepository, SqliteWorkRepository, WorkRepository,
};
use alexandria_service::{AuthorService, AuthorServiceImpl, WorkService, WorkServiceImpl};
use shaku::{module, HasComponent};
use std::sync::Arc;

// ============================================================================
// Shaku Module Definition
// ============================================================================

module! {
    pub AppModule {
        components = [
            DatabasePool,
            SqliteAuthorRepository,
            SqliteWorkRepository,
            OpenLibraryClient,
            AuthorServiceImpl,
            WorkServiceImpl,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builder
// ============================================================================

/// Builds the application module around an already-connected database pool.
///
/// The caller owns the pool lifecycle (connect, migrate, close); the
/// module shares its handle. The catalog client is constructed here from
/// the catalog configuration.
pub fn build_app_module(
    db_pool: &DatabasePool,
    catalog_config: &CatalogConfig,
) -> AlexandriaResult<Arc<AppModule>> {
    let catalog = OpenLibraryClient::new(catalog_config)?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<OpenLibraryClient>(OpenLibraryClientParameters {
            client: catalog.http_client().clone(),
            base_url: catalog.base_url().to_string(),
        })
        .build();

    Ok(Arc::new(module))
}

// ============================================================================
// Module Resolution Helpers
// ============================================================================

/// Trait for resolving the lookup services from the module.
pub trait ServiceResolver {
    /// Resolves the author search service.
    fn author_service(&self) -> Arc<dyn AuthorService>;

    /// Resolves the work listing service.
    fn work_service(&self) -> Arc<dyn WorkService>;
}

impl ServiceResolver for AppModule {
    fn author_service(&self) -> Arc<dyn AuthorService> {
        self.resolve()
    }

    fn work_service(&self) -> Arc<dyn WorkService> {
        self.resolve()
    }
}

/// Trait for resolving the store repositories from the module.
pub trait RepositoryResolver {
    /// Resolves the author repository.
    fn author_repository(&self) -> Arc<dyn AuthorRepository>;

    /// Resolves the work repository.
    fn work_repository(&self) -> Arc<dyn WorkRepository>;
}

impl RepositoryResolver for AppModule {
    fn author_repository(&self) -> Arc<dyn AuthorRepository> {
        self.resolve()
    }

    fn work_repository(&self) -> Arc<dyn WorkRepository> {
        self.resolve()
    }
}

/// Trait for resolving the database pool from the module.
pub trait DatabaseResolver {
    /// Resolves the database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl DatabaseResolver for AppModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
