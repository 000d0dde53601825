//! Work entity.

use super::super::value_objects::{AuthorKey, WorkKey};
use super::author::Author;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Work entity persisted in the local catalog store.
///
/// A work is linked to one or more authors. Links are only ever appended
/// during reconciliation; stored works never lose an author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Work {
    /// Canonical work key, e.g. `/works/OL15331W`.
    pub key: WorkKey,

    /// Title; never empty, missing upstream titles fall back to
    /// [`Self::UNKNOWN_TITLE`].
    pub title: String,

    /// Prose description, when the catalog supplies one.
    pub description: Option<String>,

    /// Subject tags in catalog order.
    pub subjects: Vec<String>,

    /// Numeric cover identifiers in catalog order.
    pub covers: Vec<i64>,

    /// Authors linked to this work.
    pub authors: Vec<Author>,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Work {
    /// Fallback title recorded when the catalog does not supply one.
    pub const UNKNOWN_TITLE: &'static str = "Unknown Title";

    /// Creates a new work with the given title and no other detail.
    #[must_use]
    pub fn new(key: WorkKey, title: impl Into<String>) -> Self {
        Self {
            key,
            title: title.into(),
            description: None,
            subjects: Vec::new(),
            covers: Vec::new(),
            authors: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Starts building a work for the given key.
    #[must_use]
    pub fn builder(key: WorkKey) -> WorkBuilder {
        WorkBuilder::new(key)
    }

    /// Checks whether the given author is already linked to this work.
    #[must_use]
    pub fn has_author(&self, key: &AuthorKey) -> bool {
        self.authors.iter().any(|a| &a.key == key)
    }

    /// Links an author to this work unless already present.
    ///
    /// Returns `true` when the link was added.
    pub fn link_author(&mut self, author: Author) -> bool {
        if self.has_author(&author.key) {
            return false;
        }
        self.authors.push(author);
        true
    }

    /// Returns the keys of all linked authors, in link order.
    #[must_use]
    pub fn author_keys(&self) -> Vec<&AuthorKey> {
        self.authors.iter().map(|a| &a.key).collect()
    }
}

/// Builder for creating Work instances.
#[derive(Debug)]
pub struct WorkBuilder {
    key: WorkKey,
    title: Option<String>,
    description: Option<String>,
    subjects: Vec<String>,
    covers: Vec<i64>,
    authors: Vec<Author>,
}

impl WorkBuilder {
    /// Creates a new work builder.
    #[must_use]
    pub fn new(key: WorkKey) -> Self {
        Self {
            key,
            title: None,
            description: None,
            subjects: Vec::new(),
            covers: Vec::new(),
            authors: Vec::new(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Sets the subject tags.
    #[must_use]
    pub fn subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Sets the cover identifiers.
    #[must_use]
    pub fn covers(mut self, covers: Vec<i64>) -> Self {
        self.covers = covers;
        self
    }

    /// Links an author.
    #[must_use]
    pub fn author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Builds the Work instance, falling back to [`Work::UNKNOWN_TITLE`]
    /// when no title was set.
    #[must_use]
    pub fn build(self) -> Work {
        Work {
            key: self.key,
            title: self.title.unwrap_or_else(|| Work::UNKNOWN_TITLE.to_string()),
            description: self.description,
            subjects: self.subjects,
            covers: self.covers,
            authors: self.authors,
            created_at: Utc::now(),
        }
    }
}
