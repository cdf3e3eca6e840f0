/// Stylesheet and image serving
///
/// Files are resolved inside the configured css directory only. Paths that
/// try to climb out of it and files that do not exist both answer 404.

use crate::api::AppState;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

/// Create the /css route backed by the given directory
pub fn create_asset_routes(css_dir: impl AsRef<Path>) -> Router<AppState> {
    tracing::debug!("Serving /css from {}", css_dir.as_ref().display());
    Router::new().nest_service("/css", ServeDir::new(css_dir.as_ref()))
}
