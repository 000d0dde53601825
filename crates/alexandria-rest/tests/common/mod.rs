//! Shared fixtures for REST endpoint tests.

use alexandria_core::AlexandriaResult;
use alexandria_rest::controllers::{author_controller, work_controller};
use alexandria_rest::state::AppState;
use alexandria_service::{AuthorService, AuthorSummary, WorkService, WorkSummary};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Author service stub answering from a fixed closure.
pub struct StubAuthorService {
    pub queries: Mutex<Vec<String>>,
    respond: Box<dyn Fn(&str) -> AlexandriaResult<Vec<AuthorSummary>> + Send + Sync>,
}

impl StubAuthorService {
    pub fn returning<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&str) -> AlexandriaResult<Vec<AuthorSummary>> + Send + Sync + 'static,
    {
        Arc::new(Self {
            queries: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }
}

#[async_trait]
impl AuthorService for StubAuthorService {
    async fn search_authors(&self, name: &str) -> AlexandriaResult<Vec<AuthorSummary>> {
        self.queries.lock().unwrap().push(name.to_string());
        (self.respond)(name)
    }
}

/// Work service stub answering from a fixed closure.
pub struct StubWorkService {
    pub requests: Mutex<Vec<String>>,
    respond: Box<dyn Fn(&str) -> AlexandriaResult<Vec<WorkSummary>> + Send + Sync>,
}

impl StubWorkService {
    pub fn returning<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&str) -> AlexandriaResult<Vec<WorkSummary>> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }
}

#[async_trait]
impl WorkService for StubWorkService {
    async fn works_by_author(&self, author_id: &str) -> AlexandriaResult<Vec<WorkSummary>> {
        self.requests.lock().unwrap().push(author_id.to_string());
        (self.respond)(author_id)
    }
}

/// Builds the versioned API router over the given stubs.
pub fn api_router(authors: Arc<StubAuthorService>, works: Arc<StubWorkService>) -> Router {
    let state = AppState::new(authors, works);
    Router::new()
        .nest("/api/v1/authors", author_controller::router())
        .nest("/api/v1/works", work_controller::router())
        .with_state(state)
}

/// Sends a GET request through the router.
pub async fn get(router: Router, uri: &str) -> Response {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Decodes a JSON response body.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
