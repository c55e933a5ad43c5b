//! Route definitions for the article endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::article;
use crate::state::AppState;

/// Article routes, mounted at the root.
///
/// ```text
/// POST   /create-article/      -> create
/// GET    /article/{id}/        -> get_by_id
/// GET    /article-list/        -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create-article/", post(article::create))
        .route("/article/{id}/", get(article::get_by_id))
        .route("/article-list/", get(article::list))
}
