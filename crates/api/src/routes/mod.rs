pub mod article;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the public route tree.
///
/// ```text
/// /health                  service + database health
/// /create-article/         create (POST)
/// /article/{id}/           get one (GET)
/// /article-list/           list all (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(article::router())
}
