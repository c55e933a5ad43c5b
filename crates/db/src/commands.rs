//! Write-side operations.

use blog_core::article::CreateArticle;
use blog_core::types::new_article_id;
use blog_core::validation::ValidationError;
use serde_json::Value;

use crate::error::ExecuteError;
use crate::models::article::Article;
use crate::repositories::ArticleRepo;
use crate::DbPool;

/// Validate and persist one new article.
#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    input: CreateArticle,
}

impl CreateArticleCommand {
    pub fn new(input: CreateArticle) -> Self {
        Self { input }
    }

    /// Build a command from an untyped JSON request body.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        CreateArticle::from_json(body).map(Self::new)
    }

    pub fn input(&self) -> &CreateArticle {
        &self.input
    }

    /// Validate the input, assign a fresh id and insert the article.
    ///
    /// Returns the stored row, including its id.
    pub async fn execute(&self, pool: &DbPool) -> Result<Article, ExecuteError> {
        self.input.check()?;

        let id = new_article_id();
        let article = ArticleRepo::create(pool, id, &self.input).await?;
        tracing::info!(article_id = %article.id, "Article created");
        Ok(article)
    }
}
