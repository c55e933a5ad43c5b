//! Handlers for the article endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use blog_core::error::CoreError;
use blog_core::types::ArticleId;
use blog_db::commands::CreateArticleCommand;
use blog_db::models::article::Article;
use blog_db::queries::{GetArticleByIdQuery, ListArticlesQuery};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /create-article/
///
/// The body is parsed into the typed request schema before the command is
/// built, so every invalid field is reported together as a 400.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<Article>> {
    let Json(body) = payload?;
    let cmd = CreateArticleCommand::from_json(&body).map_err(CoreError::from)?;
    let article = cmd.execute(&state.pool).await?;
    Ok(Json(article))
}

/// GET /article/{id}/
///
/// An id that is not a UUID cannot name any article and is reported as 404.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Article>> {
    let id = ArticleId::parse_str(&raw_id).map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: "Article",
            id: raw_id.clone(),
        })
    })?;
    let article = GetArticleByIdQuery::new(id).execute(&state.pool).await?;
    Ok(Json(article))
}

/// GET /article-list/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Article>>> {
    let articles = ListArticlesQuery.execute(&state.pool).await?;
    Ok(Json(articles))
}
