/// HTTP layer
///
/// Maps the site's routes onto page renders and project store calls:
/// - Static informational pages and the contact placeholder
/// - Project listing, creation form and deletion
/// - Stylesheet and image serving from the css directory

// Static pages, contact form and the not-found fallback
pub mod pages;

// Project listing, create form and delete endpoints
pub mod projects;

// Files served under /css
pub mod assets;

use crate::{project::ProjectStore, templates::Templates};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

pub use assets::create_asset_routes;
pub use pages::{create_page_routes, not_found};
pub use projects::create_project_routes;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Data access layer for the projects table
    pub store: ProjectStore,
    /// Compiled page templates
    pub templates: Arc<Templates>,
}

/// 302 Found redirect to a fixed location
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
