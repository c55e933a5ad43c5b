/// Articles are keyed by a random (v4) UUID assigned at creation.
pub type ArticleId = uuid::Uuid;

/// Generate a fresh article identifier.
pub fn new_article_id() -> ArticleId {
    uuid::Uuid::new_v4()
}
