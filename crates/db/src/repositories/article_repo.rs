//! Repository for the `articles` table.

use blog_core::article::CreateArticle;
use blog_core::types::ArticleId;

use crate::models::article::Article;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, author, title, content";

/// Provides create/read operations for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    /// DDL for the `articles` table. Safe to run repeatedly.
    pub fn migration_query() -> &'static str {
        "CREATE TABLE IF NOT EXISTS articles (
    id BLOB PRIMARY KEY NOT NULL,
    author TEXT NOT NULL,
    title TEXT NOT NULL,
    content TEXT
)"
    }

    /// Create the `articles` table if it does not exist yet.
    pub async fn create_table(pool: &DbPool) -> Result<(), sqlx::Error> {
        sqlx::query(Self::migration_query()).execute(pool).await?;
        Ok(())
    }

    /// Insert a new article under `id`, returning the stored row.
    pub async fn create(
        pool: &DbPool,
        id: ArticleId,
        input: &CreateArticle,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (id, author, title, content)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(&input.author)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an article by its ID.
    pub async fn find_by_id(pool: &DbPool, id: ArticleId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = ?");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all articles in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles ORDER BY rowid");
        sqlx::query_as::<_, Article>(&query).fetch_all(pool).await
    }
}
