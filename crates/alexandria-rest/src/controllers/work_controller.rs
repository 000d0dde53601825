//! Works-by-author controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use alexandria_service::WorkSummary;
use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::debug;
use utoipa::IntoParams;

/// Query parameters for the works listing.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct WorksByAuthorQuery {
    /// Author identifier; `/authors/OL23919A`, `authors/OL23919A` and
    /// `OL23919A` are all accepted. An absent parameter is treated as
    /// blank and rejected by the service.
    #[serde(default)]
    pub author_id: String,
}

/// Creates the work router.
pub fn router() -> Router<AppState> {
    Router::new().route("/by-author", get(works_by_author))
}

/// List the works linked to an author.
#[utoipa::path(
    get,
    path = "/api/v1/works/by-author",
    tag = "works",
    params(WorksByAuthorQuery),
    responses(
        (status = 200, description = "Works linked to the author", body = [WorkSummary]),
        (status = 400, description = "Blank or missing author identifier"),
        (status = 502, description = "Upstream catalog failure")
    )
)]
pub async fn works_by_author(
    State(state): State<AppState>,
    Query(query): Query<WorksByAuthorQuery>,
) -> ApiResult<Vec<WorkSummary>> {
    debug!("Works listing request: {:?}", query.author_id);

    let works = state.work_service.works_by_author(&query.author_id).await?;
    ok(works)
}
