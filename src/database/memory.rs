use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{NewPost, Post, PostUpdate};
use super::repository::{PostRepository, RepositoryError};

/// Process-local post store for tests and local runs without Postgres.
///
/// Counts every repository call and can be switched into a failing mode, which makes
/// it possible to assert that rejected requests never reach storage and to exercise
/// the error paths of each route.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<String, Post>>,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repository calls made so far (including failed ones).
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with `RepositoryError::Unavailable`.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Read a post directly, bypassing the call counter.
    pub async fn get(&self, id: &str) -> Option<Post> {
        self.posts.read().await.get(id).cloned()
    }

    /// Seed a post directly, bypassing the call counter.
    pub async fn insert(&self, post: Post) {
        self.posts.write().await.insert(post.id.clone(), post);
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("in-memory store set to fail".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepositoryError> {
        self.enter()?;
        let created = Post {
            id: Uuid::new_v4().to_string(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
        };
        self.posts.write().await.insert(created.id.clone(), created.clone());
        Ok(created)
    }

    async fn update(&self, post: PostUpdate) -> Result<Post, RepositoryError> {
        self.enter()?;
        let mut posts = self.posts.write().await;
        let existing = posts
            .get_mut(&post.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("post {}", post.id)))?;
        existing.title = post.title;
        existing.content = post.content;
        existing.author_id = post.author_id;
        Ok(existing.clone())
    }

    async fn find_many(&self) -> Result<Vec<Post>, RepositoryError> {
        self.enter()?;
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn find_first(&self, id: &str) -> Result<Option<Post>, RepositoryError> {
        self.enter()?;
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.enter()
    }
}
