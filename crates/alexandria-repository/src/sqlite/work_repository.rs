//! SQLite work repository implementation.
//!
//! A work spans four tables: the `works` row itself, positional child rows
//! in `work_subjects` and `work_covers`, and the `work_authors` link table.
//! Saves run in a single transaction so a work is never observable half
//! written.

use crate::{traits::WorkRepository, DatabasePoolInterface};
use alexandria_core::{AlexandriaError, AlexandriaResult, Author, AuthorKey, Work, WorkKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// SQLite work repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = WorkRepository)]
pub struct SqliteWorkRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteWorkRepository {
    /// Creates a new SQLite work repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }

    /// Loads subjects, covers and author links for a work row.
    async fn load_work(&self, row: WorkRow) -> AlexandriaResult<Work> {
        let subjects: Vec<String> = sqlx::query_scalar(
            r#"
            SELECT subject FROM work_subjects
            WHERE work_key = ?
            ORDER BY position
            "#,
        )
        .bind(&row.work_key)
        .fetch_all(self.pool.inner())
        .await?;

        let covers: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT cover_id FROM work_covers
            WHERE work_key = ?
            ORDER BY position
            "#,
        )
        .bind(&row.work_key)
        .fetch_all(self.pool.inner())
        .await?;

        // Author links are append-only, so rowid order is link order.
        let authors: Vec<Author> = sqlx::query_as::<_, LinkedAuthorRow>(
            r#"
            SELECT a.author_key, a.author_name, a.created_at
            FROM authors a
            JOIN work_authors wa ON wa.author_key = a.author_key
            WHERE wa.work_key = ?
            ORDER BY wa.rowid
            "#,
        )
        .bind(&row.work_key)
        .fetch_all(self.pool.inner())
        .await?
        .into_iter()
        .map(Author::from)
        .collect();

        Ok(Work {
            key: WorkKey::new_unchecked(row.work_key),
            title: row.title,
            description: row.description,
            subjects,
            covers,
            authors,
            created_at: row.created_at,
        })
    }
}

/// Database row representation of a work, without child rows.
#[derive(Debug, FromRow)]
struct WorkRow {
    work_key: String,
    title: String,
    description: Option<String>,
    created_at: DateTime<Utc>,
}

/// Database row for an author joined through the link table.
#[derive(Debug, FromRow)]
struct LinkedAuthorRow {
    author_key: String,
    author_name: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<LinkedAuthorRow> for Author {
    fn from(row: LinkedAuthorRow) -> Self {
        Author {
            key: AuthorKey::new_unchecked(row.author_key),
            name: row.author_name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl WorkRepository for SqliteWorkRepository {
    async fn find_by_key(&self, key: &WorkKey) -> AlexandriaResult<Option<Work>> {
        debug!("Finding work by key: {}", key);

        let row = sqlx::query_as::<_, WorkRow>(
            r#"
            SELECT work_key, title, description, created_at
            FROM works
            WHERE work_key = ?
            "#,
        )
        .bind(key.as_str())
        .fetch_optional(self.pool.inner())
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_work(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_author_key(&self, key: &AuthorKey) -> AlexandriaResult<Vec<Work>> {
        debug!("Finding works linked to author: {}", key);

        let rows = sqlx::query_as::<_, WorkRow>(
            r#"
            SELECT w.work_key, w.title, w.description, w.created_at
            FROM works w
            JOIN work_authors wa ON wa.work_key = w.work_key
            WHERE wa.author_key = ?
            ORDER BY w.created_at, w.work_key
            "#,
        )
        .bind(key.as_str())
        .fetch_all(self.pool.inner())
        .await?;

        let mut works = Vec::with_capacity(rows.len());
        for row in rows {
            works.push(self.load_work(row).await?);
        }
        Ok(works)
    }

    async fn save(&self, work: &Work) -> AlexandriaResult<Work> {
        debug!("Saving work: {}", work.key);

        let mut tx = self.pool.inner().begin().await?;

        sqlx::query(
            r#"
            INSERT INTO works (work_key, title, description, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (work_key) DO UPDATE SET
                title = excluded.title,
                description = excluded.description
            "#,
        )
        .bind(work.key.as_str())
        .bind(&work.title)
        .bind(work.description.as_deref())
        .bind(work.created_at)
        .execute(&mut *tx)
        .await?;

        // Subjects and covers carry the latest catalog snapshot: replace.
        sqlx::query("DELETE FROM work_subjects WHERE work_key = ?")
            .bind(work.key.as_str())
            .execute(&mut *tx)
            .await?;

        for (position, subject) in work.subjects.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO work_subjects (work_key, position, subject)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(work.key.as_str())
            .bind(position as i64)
            .bind(subject)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM work_covers WHERE work_key = ?")
            .bind(work.key.as_str())
            .execute(&mut *tx)
            .await?;

        for (position, cover_id) in work.covers.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO work_covers (work_key, position, cover_id)
                VALUES (?, ?, ?)
                "#,
            )
            .bind(work.key.as_str())
            .bind(position as i64)
            .bind(cover_id)
            .execute(&mut *tx)
            .await?;
        }

        // Links accumulate: never delete, and create the author row when
        // missing so a link cannot dangle.
        for author in &work.authors {
            sqlx::query(
                r#"
                INSERT INTO authors (author_key, author_name, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT (author_key) DO NOTHING
                "#,
            )
            .bind(author.key.as_str())
            .bind(author.name.as_deref())
            .bind(author.created_at)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                INSERT INTO work_authors (work_key, author_key)
                VALUES (?, ?)
                ON CONFLICT (work_key, author_key) DO NOTHING
                "#,
            )
            .bind(work.key.as_str())
            .bind(author.key.as_str())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        self.find_by_key(&work.key).await?.ok_or_else(|| {
            AlexandriaError::Database(format!("Work {} not found after save", work.key))
        })
    }
}
