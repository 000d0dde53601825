//! Main application router.

use crate::{
    controllers::{author_controller, health_controller, work_controller},
    middleware::logging_middleware,
    openapi::ApiDoc,
    state::AppState,
};
use alexandria_config::ServerConfig;
use alexandria_service::{AuthorService, WorkService};
use axum::{middleware, routing::get, Router};
use shaku::{HasComponent, Module};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router from a Shaku module.
///
/// The module must provide the `AuthorService` and `WorkService`
/// components.
pub fn create_router<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module + HasComponent<dyn AuthorService> + HasComponent<dyn WorkService>,
{
    let cors = create_cors_layer(server_config);
    let state = AppState::from_module(module);

    let api_router = Router::new()
        .nest("/authors", author_controller::router())
        .nest("/works", work_controller::router())
        .with_state(state);

    let router = Router::new()
        // Health endpoints live outside the versioned API
        .merge(health_controller::router())
        // API v1
        .nest("/api/v1", api_router)
        // Swagger UI and OpenAPI spec
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Root endpoint
        .route("/", get(root))
        // Middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints and Swagger UI at /swagger-ui");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Alexandria Catalog API v1"
}
