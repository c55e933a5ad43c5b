//! Read-side operations.

use blog_core::error::CoreError;
use blog_core::types::ArticleId;

use crate::error::ExecuteError;
use crate::models::article::Article;
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Fetch a single article by id.
#[derive(Debug, Clone, Copy)]
pub struct GetArticleByIdQuery {
    pub id: ArticleId,
}

impl GetArticleByIdQuery {
    pub fn new(id: ArticleId) -> Self {
        Self { id }
    }

    /// Returns the stored article, or [`CoreError::NotFound`] if no article
    /// has this id.
    pub async fn execute(&self, pool: &DbPool) -> Result<Article, ExecuteError> {
        match ArticleRepo::find_by_id(pool, self.id).await? {
            Some(article) => Ok(article),
            None => {
                tracing::debug!(article_id = %self.id, "Article not found");
                Err(CoreError::NotFound {
                    entity: "Article",
                    id: self.id.to_string(),
                }
                .into())
            }
        }
    }
}

/// Fetch every stored article.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery;

impl ListArticlesQuery {
    /// Returns all articles in insertion order.
    pub async fn execute(&self, pool: &DbPool) -> Result<Vec<Article>, ExecuteError> {
        let articles = ArticleRepo::list(pool).await?;
        tracing::debug!(count = articles.len(), "Listed articles");
        Ok(articles)
    }
}
