//! Repository layer: one zero-sized struct per table.

pub mod article_repo;

pub use article_repo::ArticleRepo;
