//! Integration tests for the article repository and the command/query layer.
//!
//! Each test opens a fresh SQLite file inside its own temporary directory.

use assert_matches::assert_matches;
use blog_core::article::CreateArticle;
use blog_core::error::CoreError;
use blog_core::types::new_article_id;
use blog_db::commands::CreateArticleCommand;
use blog_db::error::ExecuteError;
use blog_db::queries::{GetArticleByIdQuery, ListArticlesQuery};
use blog_db::repositories::ArticleRepo;
use blog_db::{create_pool, health_check, DbConfig, DbPool};
use serde_json::json;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Open a pool over a new database file and create the articles table.
///
/// The returned `TempDir` must outlive the pool.
async fn test_pool() -> (DbPool, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::new(dir.path().join("blog.db"));
    let pool = create_pool(&config).await.unwrap();
    ArticleRepo::create_table(&pool).await.unwrap();
    (pool, dir)
}

fn new_article(author: &str, title: &str, content: Option<&str>) -> CreateArticle {
    CreateArticle {
        author: author.to_string(),
        title: title.to_string(),
        content: content.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Pool / table lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_pool_creates_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.db");
    assert!(!path.exists());

    let pool = create_pool(&DbConfig::new(&path)).await.unwrap();
    health_check(&pool).await.unwrap();

    assert!(path.exists());
}

#[tokio::test]
async fn create_table_is_idempotent() {
    let (pool, _dir) = test_pool().await;

    ArticleRepo::create_table(&pool).await.unwrap();
    ArticleRepo::create_table(&pool).await.unwrap();

    assert!(ArticleRepo::list(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn data_survives_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = DbConfig::new(dir.path().join("blog.db"));

    let pool = create_pool(&config).await.unwrap();
    ArticleRepo::create_table(&pool).await.unwrap();
    let id = new_article_id();
    ArticleRepo::create(&pool, id, &new_article("A", "T", None))
        .await
        .unwrap();
    pool.close().await;

    let pool = create_pool(&config).await.unwrap();
    let found = ArticleRepo::find_by_id(&pool, id).await.unwrap();
    assert_eq!(found.map(|a| a.title), Some("T".to_string()));
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repo_create_then_find_by_id() {
    let (pool, _dir) = test_pool().await;
    let id = new_article_id();

    let created = ArticleRepo::create(&pool, id, &new_article("Ann", "Hello", Some("Body")))
        .await
        .unwrap();
    assert_eq!(created.id, id);

    let found = ArticleRepo::find_by_id(&pool, id).await.unwrap();
    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn repo_find_unknown_id_returns_none() {
    let (pool, _dir) = test_pool().await;
    let found = ArticleRepo::find_by_id(&pool, new_article_id()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn repo_duplicate_id_is_rejected() {
    let (pool, _dir) = test_pool().await;
    let id = new_article_id();

    ArticleRepo::create(&pool, id, &new_article("A", "One", None))
        .await
        .unwrap();
    let second = ArticleRepo::create(&pool, id, &new_article("B", "Two", None)).await;

    assert_matches!(second, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// CreateArticleCommand
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_command_persists_and_returns_article() {
    let (pool, _dir) = test_pool().await;
    let cmd = CreateArticleCommand::new(new_article(
        "Maxly Garcia",
        "New Article",
        Some("Some extra awesome content"),
    ));

    let article = cmd.execute(&pool).await.unwrap();

    assert_eq!(article.author, cmd.input().author);
    assert_eq!(article.title, "New Article");
    assert_eq!(article.content.as_deref(), Some("Some extra awesome content"));
    assert_eq!(ArticleRepo::list(&pool).await.unwrap(), vec![article]);
}

#[tokio::test]
async fn create_command_assigns_distinct_ids() {
    let (pool, _dir) = test_pool().await;
    let cmd = CreateArticleCommand::new(new_article("A", "Same", None));

    let first = cmd.execute(&pool).await.unwrap();
    let second = cmd.execute(&pool).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn create_command_from_json_without_content() {
    let (pool, _dir) = test_pool().await;
    let cmd =
        CreateArticleCommand::from_json(&json!({"author": "John Doe", "title": "New Article"}))
            .unwrap();

    let article = cmd.execute(&pool).await.unwrap();

    assert_eq!(article.content, None);
}

#[tokio::test]
async fn create_command_from_json_rejects_null_title() {
    let result = CreateArticleCommand::from_json(&json!({
        "author": "Maxly Garcia",
        "title": null,
        "content": "Some extra awesome content"
    }));

    let err = result.unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.errors()[0].field(), "title");
}

#[tokio::test]
async fn create_command_validates_on_execute() {
    let (pool, _dir) = test_pool().await;
    let cmd = CreateArticleCommand::new(new_article("", "", None));

    let result = cmd.execute(&pool).await;

    let errors = match result {
        Err(ExecuteError::Core(CoreError::Validation(errors))) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    let fields: Vec<_> = errors.errors().iter().map(|e| e.field()).collect();
    assert_eq!(fields, ["author", "title"]);
    assert!(ArticleRepo::list(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_command_surfaces_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    let pool = create_pool(&DbConfig::new(dir.path().join("blog.db")))
        .await
        .unwrap();
    // No create_table: the insert must fail.
    let cmd = CreateArticleCommand::new(new_article("A", "T", None));

    assert_matches!(cmd.execute(&pool).await, Err(ExecuteError::Database(_)));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_by_id_query_returns_exact_record() {
    let (pool, _dir) = test_pool().await;
    let created = CreateArticleCommand::new(new_article("Ann", "Hello", None))
        .execute(&pool)
        .await
        .unwrap();

    let fetched = GetArticleByIdQuery::new(created.id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_by_id_query_signals_not_found() {
    let (pool, _dir) = test_pool().await;
    let id = new_article_id();

    let result = GetArticleByIdQuery::new(id).execute(&pool).await;

    assert_matches!(
        result,
        Err(ExecuteError::Core(CoreError::NotFound { entity: "Article", id: ref missing }))
            if *missing == id.to_string()
    );
}

#[tokio::test]
async fn list_query_returns_all_in_insertion_order() {
    let (pool, _dir) = test_pool().await;
    let mut created = Vec::new();
    for title in ["first", "second", "third"] {
        let article = CreateArticleCommand::new(new_article("A", title, None))
            .execute(&pool)
            .await
            .unwrap();
        created.push(article);
    }

    let listed = ListArticlesQuery.execute(&pool).await.unwrap();

    assert_eq!(listed, created);
}

#[tokio::test]
async fn list_query_is_repeatable_without_writes() {
    let (pool, _dir) = test_pool().await;
    for title in ["a", "b"] {
        CreateArticleCommand::new(new_article("A", title, Some("c")))
            .execute(&pool)
            .await
            .unwrap();
    }

    let first = ListArticlesQuery.execute(&pool).await.unwrap();
    let second = ListArticlesQuery.execute(&pool).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}
