/// Server setup and initialization
///
/// Wires together the project store, templates and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_asset_routes, create_page_routes, create_project_routes, not_found, AppState},
    config::Config,
    project::ProjectStore,
    templates::Templates,
};
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// Create the main Axum application with all routes and middleware
///
/// Ensures the projects table exists before any route is served.
pub async fn create_app(config: Config) -> Result<Router> {
    // Ensure the database directory exists
    if let Some(parent) = config.database.path.parent() {
        if !parent.as_os_str().is_empty() {
            tracing::info!("📁 Ensuring database directory exists: {}", parent.display());
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create database directory {}", parent.display())
            })?;
        }
    }

    tracing::info!("🗄️ Initializing project store: {}", config.database.path.display());
    let store = ProjectStore::new(&config.database.path);
    store
        .init()
        .await
        .context("Failed to initialize projects schema")?;

    tracing::info!("📄 Compiling page templates");
    let templates = Templates::new().context("Failed to compile page templates")?;

    let state = AppState {
        store,
        templates: Arc::new(templates),
    };

    tracing::info!("📡 Creating HTTP router with all endpoints");
    let app = Router::new()
        .merge(create_page_routes())
        .merge(create_project_routes())
        .merge(create_asset_routes(&config.assets.css_dir))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("✅ Application initialized successfully");

    Ok(app)
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins when set; otherwise debug mode logs at debug level.
pub fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();
}

/// Start the HTTP server with the given configuration
///
/// Creates the application and serves it on the configured address until Ctrl-C.
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing(config.server.debug);

    tracing::info!("Starting portfolio server...");
    if config.server.debug {
        tracing::debug!("Configuration: {:?}", config);
    }

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
