//! SQLite author repository implementation.

use crate::{traits::AuthorRepository, DatabasePoolInterface};
use alexandria_core::{AlexandriaError, AlexandriaResult, Author, AuthorKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite author repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = AuthorRepository)]
pub struct SqliteAuthorRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteAuthorRepository {
    /// Creates a new SQLite author repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of an author.
#[derive(Debug, FromRow)]
struct AuthorRow {
    author_key: String,
    author_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author {
            // Keys are normalized before they reach the store.
            key: AuthorKey::new_unchecked(row.author_key),
            name: row.author_name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn find_by_key(&self, key: &AuthorKey) -> AlexandriaResult<Option<Author>> {
        debug!("Finding author by key: {}", key);

        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT author_key, author_name, created_at
            FROM authors
            WHERE author_key = ?
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Author::from))
    }

    async fn find_by_name_contains(&self, fragment: &str) -> AlexandriaResult<Vec<Author>> {
        debug!("Finding authors by name fragment: {:?}", fragment);

        let rows = sqlx::query_as::<_, AuthorRow>(
            r#"
            SELECT author_key, author_name, created_at
            FROM authors
            WHERE author_name IS NOT NULL
              AND LOWER(author_name) LIKE '%' || LOWER(?) || '%'
            ORDER BY created_at, author_key
            "#,
        )
        .bind(fragment)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn save(&self, author: &Author) -> AlexandriaResult<Author> {
        debug!("Saving author: {}", author.key);

        sqlx::query(
            r#"
            INSERT INTO authors (author_key, author_name, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT (author_key) DO UPDATE SET author_name = excluded.author_name
            "#,
        )
        .bind(author.key.as_str())
        .bind(author.name.as_deref())
        .bind(author.created_at)
        .execute(self.pool.inner())
        .await?;

        self.find_by_key(&author.key).await?.ok_or_else(|| {
            AlexandriaError::Database(format!("Author {} not found after save", author.key))
        })
    }
}
