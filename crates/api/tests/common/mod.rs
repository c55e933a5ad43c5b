#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use blog_api::config::ServerConfig;
use blog_api::router::build_app_router;
use blog_api::state::AppState;
use blog_db::repositories::ArticleRepo;
use blog_db::{DbConfig, DbPool};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// A database file in its own temporary directory, removed on drop.
pub struct TestDb {
    pub pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    /// Open a fresh database with the articles table created.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let pool = blog_db::create_pool(&DbConfig::new(dir.path().join("blog.db")))
            .await
            .unwrap();
        ArticleRepo::create_table(&pool).await.unwrap();
        Self { pool, _dir: dir }
    }

    /// Build the application router over this database.
    pub fn app(&self) -> Router {
        build_test_app(self.pool.clone())
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DbConfig::new(":memory:"),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
