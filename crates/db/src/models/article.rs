//! Article entity model.

use blog_core::types::ArticleId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An article row from the `articles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub author: String,
    pub title: String,
    pub content: Option<String>,
}
