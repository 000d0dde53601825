//! OpenLibrary implementation of the catalog client.

use crate::catalog_client::{AuthorSearchPage, CatalogClient};
use alexandria_config::CatalogConfig;
use alexandria_core::{AlexandriaError, AlexandriaResult, AuthorKey};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shaku::Component;
use std::time::Duration;
use tracing::debug;

/// Upstream name used in error messages.
const SERVICE_NAME: &str = "openlibrary";

/// OpenLibrary catalog client.
///
/// Uses HTTP/1.1 with JSON over the public OpenLibrary REST API.
#[derive(Component)]
#[shaku(interface = CatalogClient)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    /// Creates a new OpenLibrary client from catalog configuration.
    pub fn new(config: &CatalogConfig) -> AlexandriaResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(100)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| {
                AlexandriaError::external_service(
                    SERVICE_NAME,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Creates an OpenLibrary client around a pre-built reqwest client.
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Returns the catalog base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// HTTP 404 and a literal `null` body both mean "the catalog has
    /// nothing here" and come back as `Ok(None)`.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AlexandriaResult<Option<T>> {
        let url = self.url(path);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AlexandriaError::external_service(SERVICE_NAME, format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlexandriaError::external_service(
                SERVICE_NAME,
                format!("HTTP {}: {}", status, body),
            ));
        }

        response.json::<Option<T>>().await.map_err(|e| {
            AlexandriaError::external_service(SERVICE_NAME, format!("Invalid JSON body: {}", e))
        })
    }
}

#[async_trait]
impl CatalogClient for OpenLibraryClient {
    async fn search_authors(&self, name: &str) -> AlexandriaResult<Option<AuthorSearchPage>> {
        debug!("Searching catalog authors: {:?}", name);

        // The catalog expects literal %20 escapes for spaces in the query.
        let query = name.replace(' ', "%20");
        self.get_json(&format!("/search/authors.json?q={}", query))
            .await
    }

    async fn author_works(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>> {
        debug!("Fetching catalog works feed for {}", key);
        self.get_json(&format!("{}/works.json", key.as_str())).await
    }

    async fn author_details(&self, key: &AuthorKey) -> AlexandriaResult<Option<Value>> {
        debug!("Fetching catalog author details for {}", key);
        self.get_json(&format!("{}.json", key.as_str())).await
    }
}
