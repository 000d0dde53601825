//! Author entity.

use super::super::value_objects::AuthorKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author entity persisted in the local catalog store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    /// Canonical author key, e.g. `/authors/OL23919A`.
    pub key: AuthorKey,

    /// Display name as reported by the catalog.
    pub name: Option<String>,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Author {
    /// Fallback name recorded when the catalog cannot supply one.
    pub const UNKNOWN_NAME: &'static str = "Unknown Author";

    /// Creates a new author with the given name.
    #[must_use]
    pub fn new(key: AuthorKey, name: Option<String>) -> Self {
        Self {
            key,
            name,
            created_at: Utc::now(),
        }
    }

    /// Creates an author whose name could not be resolved from the catalog.
    #[must_use]
    pub fn with_unknown_name(key: AuthorKey) -> Self {
        Self::new(key, Some(Self::UNKNOWN_NAME.to_string()))
    }

    /// Returns the display name, falling back to [`Self::UNKNOWN_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(Self::UNKNOWN_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> AuthorKey {
        AuthorKey::new(raw).unwrap()
    }

    #[test]
    fn test_author_creation() {
        let author = Author::new(key("OL23919A"), Some("J. K. Rowling".to_string()));
        assert_eq!(author.key.as_str(), "/authors/OL23919A");
        assert_eq!(author.name.as_deref(), Some("J. K. Rowling"));
    }

    #[test]
    fn test_author_with_unknown_name() {
        let author = Author::with_unknown_name(key("OL1A"));
        assert_eq!(author.name.as_deref(), Some("Unknown Author"));
    }

    #[test]
    fn test_display_name_present() {
        let author = Author::new(key("OL1A"), Some("Iain Banks".to_string()));
        assert_eq!(author.display_name(), "Iain Banks");
    }

    #[test]
    fn test_display_name_missing() {
        let author = Author::new(key("OL1A"), None);
        assert_eq!(author.display_name(), "Unknown Author");
    }

    #[test]
    fn test_author_clone() {
        let author = Author::new(key("OL1A"), Some("Name".to_string()));
        let cloned = author.clone();
        assert_eq!(cloned.key, author.key);
        assert_eq!(cloned.name, author.name);
    }

    #[test]
    fn test_author_serializes_canonical_key() {
        let author = Author::new(key("OL1A"), None);
        let json = serde_json::to_string(&author).unwrap();
        assert!(json.contains("/authors/OL1A"));
    }
}
