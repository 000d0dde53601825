//! Catalog client trait and wire types.

use alexandria_core::{AlexandriaResult, AuthorKey, Interface};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One author document from the catalog's search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDoc {
    /// Upstream identifier; the catalog returns bare ids here
    /// (`OL23919A`) rather than the prefixed form.
    pub key: String,

    /// Display name, when the catalog supplies one.
    #[serde(default)]
    pub name: Option<String>,
}

/// One page of author search results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchPage {
    /// Total number of matches reported by the catalog.
    #[serde(rename = "numFound", default)]
    pub num_found: i64,

    /// The documents on this page.
    #[serde(default)]
    pub docs: Vec<AuthorDoc>,
}

impl AuthorSearchPage {
    /// Returns true when the page carries no usable matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_found == 0 || self.docs.is_empty()
    }
}

/// Read access to the upstream bibliographic catalog.
///
/// All operations return `Ok(None)` when the catalog has nothing for the
/// request (HTTP 404 or a literal `null` body) and an error only for
/// transport, protocol or decode failures.
#[async_trait]
pub trait CatalogClient: Interface + Send + Sync {
    /// Searches authors by free-text name.
    async fn search_authors(&self, name: &str) -> AlexandriaResult<Option<AuthorSearchPage>>;

    /// Fetches the works feed for an author.
    ///
    /// The feed is loosely structured, so it is surfaced as raw JSON and
    /// picked apart by the service layer.
    async fn author_works(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>>;

    /// Fetches the detail record for an author.
    async fn author_details(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_page_deserializes_camel_case() {
        let page: AuthorSearchPage = serde_json::from_str(
            r#"{"numFound": 2, "docs": [{"key": "OL1A", "name": "A"}, {"key": "OL2A"}]}"#,
        )
        .unwrap();
        assert_eq!(page.num_found, 2);
        assert_eq!(page.docs.len(), 2);
        assert_eq!(page.docs[0].name.as_deref(), Some("A"));
        assert!(page.docs[1].name.is_none());
    }

    #[test]
    fn test_search_page_missing_fields_default() {
        let page: AuthorSearchPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page.num_found, 0);
        assert!(page.docs.is_empty());
        assert!(page.is_empty());
    }

    #[test]
    fn test_search_page_zero_matches_is_empty() {
        let page: AuthorSearchPage =
            serde_json::from_str(r#"{"numFound": 0, "docs": []}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn test_search_page_with_docs_is_not_empty() {
        let page: AuthorSearchPage =
            serde_json::from_str(r#"{"numFound": 1, "docs": [{"key": "OL1A"}]}"#).unwrap();
        assert!(!page.is_empty());
    }
}
