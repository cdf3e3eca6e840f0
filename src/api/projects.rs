/// Project showcase endpoints
///
/// The create form re-renders silently when any field is blank after
/// trimming; nothing is stored and no message is shown. Deletion always
/// redirects back to the listing, whether or not the id existed.

use crate::{
    api::{found, pages::not_found, AppState},
    error::AppResult,
    project::ProjectForm,
    templates::Page,
};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};

/// Create project routes
pub fn create_project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects))
        .route("/form", get(project_form).post(create_project))
        .route("/delete_project/{id}", post(delete_project))
}

/// GET /projects
///
/// Every stored project, newest first.
async fn list_projects(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects = state.store.list_all().await?;
    tracing::debug!("Rendering {} project(s)", projects.len());
    Ok(Html(state.templates.render_projects(&projects)?))
}

/// GET /form
async fn project_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.templates.render_page(Page::ProjectForm)?))
}

/// POST /form
/// Body: title=...&description=...&image_file_name=...
///
/// A body that cannot be read as a urlencoded form counts as an empty form.
async fn create_project(
    State(state): State<AppState>,
    body: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> AppResult<Response> {
    let form = match body {
        Ok(Form(pairs)) => ProjectForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!("Unreadable project form body: {}", rejection);
            ProjectForm::default()
        }
    };

    match form.validate() {
        Ok(project) => {
            state
                .store
                .add(&project.title, &project.description, &project.image_file_name)
                .await?;
            Ok(found("/projects"))
        }
        Err(e) => {
            tracing::debug!("Rejected project form: {}", e);
            Ok(Html(state.templates.render_page(Page::ProjectForm)?).into_response())
        }
    }
}

/// POST /delete_project/{id}
///
/// Ids that are not plain decimal digits match no project and answer 404.
async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let parsed = if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        id.parse::<i64>().ok()
    } else {
        None
    };
    let Some(id) = parsed else {
        tracing::debug!("Delete requested for non-numeric id '{}'", id);
        return Ok(not_found(State(state)).await?.into_response());
    };

    state.store.delete(id).await?;
    Ok(found("/projects"))
}
