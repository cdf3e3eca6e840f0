#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use folio::config::{AssetsConfig, Config, DatabaseConfig, ServerConfig};
use folio::ProjectStore;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// A fully wired app over a throwaway database and css directory.
///
/// The `TempDir` must outlive the test, so it is kept alongside the router.
pub struct TestApp {
    pub router: Router,
    pub store: ProjectStore,
    pub dir: TempDir,
}

/// Build a test `Config` rooted in `dir`.
pub fn test_config(dir: &TempDir) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            debug: true,
        },
        database: DatabaseConfig {
            path: dir.path().join("data").join("projects.db"),
        },
        assets: AssetsConfig {
            css_dir: dir.path().join("css"),
        },
    }
}

/// Build the app exactly as production does, with a few files in css/.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&dir);

    std::fs::create_dir_all(config.assets.css_dir.join("images")).unwrap();
    std::fs::write(config.assets.css_dir.join("styles.css"), "body { color: red; }").unwrap();
    std::fs::write(config.assets.css_dir.join("images").join("cat.jpg"), b"not really a jpeg")
        .unwrap();
    std::fs::write(dir.path().join("secret.txt"), "outside the css dir").unwrap();

    let store = ProjectStore::new(&config.database.path);
    let router = folio::create_app(config).await.unwrap();

    TestApp { router, store, dir }
}

/// Send a GET request.
pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Send a POST with an empty body.
pub async fn post(app: &TestApp, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Send a urlencoded form POST.
pub async fn post_form(app: &TestApp, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Send a POST with an arbitrary content type and raw body.
pub async fn post_raw(app: &TestApp, uri: &str, content_type: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.router.clone().oneshot(request).await.unwrap()
}

/// Read the full response body as UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Value of the Location header, if any.
pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
