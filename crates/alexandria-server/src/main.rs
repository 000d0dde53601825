//! # Alexandria Server
//!
//! Main entry point for the Alexandria catalog lookup service.
//!
//! Serves the REST API over a SQLite-backed store, fetching from the
//! upstream OpenLibrary catalog on store misses.

use alexandria_config::{AppConfig, ConfigLoader, ObservabilityConfig};
use alexandria_core::{AlexandriaError, AlexandriaResult};
use alexandria_repository::create_pool;
use alexandria_rest::create_router;
use alexandria_server::{di, startup};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration is loaded before the subscriber so the configured
    // log level and format are honored from the first event on.
    let config = match load_config().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);

    info!("Starting Alexandria Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn load_config() -> AlexandriaResult<AppConfig> {
    let config_loader = ConfigLoader::from_default_location()?;
    Ok(config_loader.get().await)
}

async fn run(config: AppConfig) -> AlexandriaResult<()> {
    startup::print_banner();

    // Create database pool and bring the schema up to date
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    // Build DI module - centralized dependency injection
    let module = di::build_app_module(&db_pool, &config.catalog)?;

    // Create REST router
    let router = create_router(module.as_ref(), &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);
    startup::print_startup_info(&config.server);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AlexandriaError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AlexandriaError::Internal(format!("REST server error: {}", e)))?;

    db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_logging(config: &ObservabilityConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{},alexandria=debug,tower_http=debug",
            config.log_level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
