/// Static pages and the contact placeholder
///
/// None of these routes touch storage. The contact form accepts a POST but
/// discards whatever was submitted.

use crate::{
    api::{found, AppState},
    error::AppResult,
    templates::Page,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Response},
    routing::get,
    Router,
};

/// Create routes for the informational pages
pub fn create_page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/resume", get(resume))
        .route("/contact", get(contact_form).post(submit_contact))
        .route("/thankyou", get(thank_you))
}

fn render(state: &AppState, page: Page) -> AppResult<Html<String>> {
    Ok(Html(state.templates.render_page(page)?))
}

async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::Home)
}

async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::About)
}

async fn resume(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::Resume)
}

async fn contact_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::Contact)
}

/// POST /contact
///
/// Submitted data is ignored; the visitor always lands on the thank-you page.
async fn submit_contact() -> Response {
    tracing::debug!("Contact form submitted, redirecting to /thankyou");
    found("/thankyou")
}

async fn thank_you(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, Page::ThankYou)
}

/// Fallback for unmatched paths
pub async fn not_found(State(state): State<AppState>) -> AppResult<(StatusCode, Html<String>)> {
    Ok((StatusCode::NOT_FOUND, render(&state, Page::NotFound)?))
}
