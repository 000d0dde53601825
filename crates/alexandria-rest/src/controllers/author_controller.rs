//! Author search controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use alexandria_service::AuthorSummary;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Query parameters for author search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AuthorSearchQuery {
    /// Free-text author name. An absent parameter is treated as an empty
    /// query, which matches every stored author with a name.
    #[serde(default)]
    pub q: String,
}

/// Creates the author router.
pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_authors))
}

/// Search authors by name.
#[utoipa::path(
    get,
    path = "/api/v1/authors/search",
    tag = "authors",
    params(AuthorSearchQuery),
    responses(
        (status = 200, description = "Matching authors", body = [AuthorSummary]),
        (status = 502, description = "Upstream catalog failure")
    )
)]
pub async fn search_authors(
    State(state): State<AppState>,
    Query(query): Query<AuthorSearchQuery>,
) -> ApiResult<Vec<AuthorSummary>> {
    debug!("Author search request: {:?}", query.q);

    let authors = state.author_service.search_authors(&query.q).await?;
    ok(authors)
}
