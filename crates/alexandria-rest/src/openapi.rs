//! OpenAPI documentation configuration.

use alexandria_core::ErrorResponse;
use alexandria_service::{AuthorSummary, WorkSummary};
use utoipa::OpenApi;

use crate::controllers::health_controller::HealthResponse;

/// OpenAPI documentation for the Alexandria API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Alexandria API",
        version = "1.0.0",
        description = "Cache-aside lookup service over the OpenLibrary catalog",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::author_controller::search_authors,
        crate::controllers::work_controller::works_by_author,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            AuthorSummary,
            WorkSummary,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "authors", description = "Author search endpoints"),
        (name = "works", description = "Work listing endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
