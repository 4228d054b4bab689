use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::manager::DatabaseManager;
use super::models::{NewPost, Post, PostUpdate};
use super::repository::{PostRepository, RepositoryError};

/// Postgres-backed posts. Expects a table created out of band:
///
/// ```sql
/// CREATE TABLE posts (
///     id        TEXT PRIMARY KEY,
///     title     TEXT NOT NULL,
///     content   TEXT NOT NULL,
///     author_id TEXT NOT NULL
/// );
/// ```
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError> {
        let id = Uuid::new_v4().to_string();

        let created = sqlx::query_as::<_, Post>(
            "INSERT INTO posts (id, title, content, author_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, author_id",
        )
        .bind(&id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Inserted post {} for author {}", created.id, created.author_id);
        Ok(created)
    }

    async fn update(&self, post: PostUpdate) -> Result<Post, RepositoryError> {
        let updated = sqlx::query_as::<_, Post>(
            "UPDATE posts
             SET title = $2, content = $3, author_id = $4
             WHERE id = $1
             RETURNING id, title, content, author_id",
        )
        .bind(&post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(&post.author_id)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound(format!("post {}", post.id)))
    }

    async fn find_many(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = sqlx::query_as::<_, Post>("SELECT id, title, content, author_id FROM posts")
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn find_first(&self, id: &str) -> Result<Option<Post>, RepositoryError> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id FROM posts WHERE id = $1 LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
