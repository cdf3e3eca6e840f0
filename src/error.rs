/// Handler-level error type
///
/// Storage and template failures are not recovered anywhere in the request
/// path: they surface as a generic 500 page and are logged.

use crate::project::StoreError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

const FALLBACK_500: &str = "<!DOCTYPE html>\n<html><head><title>Server Error</title></head>\
<body><h1>Internal Server Error</h1></body></html>";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(FALLBACK_500)).into_response()
    }
}
