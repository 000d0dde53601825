//! Common test infrastructure for database integration tests.

use alexandria_repository::{DatabasePool, DatabasePoolInterface};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::sync::Arc;

/// Test database wrapper around an in-memory SQLite pool.
///
/// Runs migrations automatically. The pool is capped at a single connection
/// because every in-memory SQLite connection is its own database.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh in-memory database with the schema applied.
    pub async fn new() -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(SqliteConnectOptions::new().in_memory(true))
            .await
            .expect("Failed to open in-memory SQLite database");

        let pool = Arc::new(DatabasePool::with_pool(pool));
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self { pool }
    }

    /// Returns the pool as the injection interface.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.pool.clone()
    }
}
