use async_trait::async_trait;
use thiserror::Error;

use super::models::{NewPost, Post, PostUpdate};

/// Errors from post storage
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Data access for the posts table. Handlers only ever see this trait, so the
/// backing store can be Postgres in production and a map in tests.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post and return it with its generated id.
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError>;

    /// Overwrite title, content and author of an existing post.
    /// Missing ids are `RepositoryError::NotFound`.
    async fn update(&self, post: PostUpdate) -> Result<Post, RepositoryError>;

    /// Every stored post, in no particular order.
    async fn find_many(&self) -> Result<Vec<Post>, RepositoryError>;

    /// First post with the given id, if any.
    async fn find_first(&self, id: &str) -> Result<Option<Post>, RepositoryError>;

    /// Connectivity check for `/health`.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
