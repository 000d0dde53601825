//! Server startup utilities.

use alexandria_config::ServerConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ___      __                                          __             _
   /   |    / /   ___     _  __   ____ _    ____    ____/ /    _____   (_)   ____ _
  / /| |   / /   / _ \   | |/_/  / __ `/   / __ \  / __  /    / ___/  / /   / __ `/
 / ___ |  / /   /  __/  _>  <   / /_/ /   / / / / / /_/ /    / /     / /   / /_/ /
/_/  |_| /_/   \___/  /_/|_|   \__,_/   /_/ /_/  \__,_/    /_/     /_/   \__,_/

                          Catalog Lookup Service
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(server: &ServerConfig) {
    let separator = "=".repeat(60);
    let addr = server.addr();
    info!("{}", separator);
    info!("REST API:    http://{}/api/v1", addr);
    info!("Health:      http://{}/health", addr);
    info!("Swagger UI:  http://{}/swagger-ui", addr);
    info!("OpenAPI:     http://{}/api-docs/openapi.json", addr);
    info!("{}", separator);
}
