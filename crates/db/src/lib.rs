//! Storage layer for the blog service.
//!
//! Articles live in a single table of a file-backed SQLite database.
//! The command/query objects in [`commands`] and [`queries`] are the
//! entry points used by the HTTP layer.

use std::path::PathBuf;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod commands;
pub mod error;
pub mod models;
pub mod queries;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Where and how to open the article store.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path of the SQLite database file. Created if missing.
    pub path: PathBuf,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
        }
    }
}

/// Create a connection pool for the database described by `config`.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true);

    tracing::debug!(path = %config.path.display(), "Opening article database");

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
