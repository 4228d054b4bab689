use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored blog post. Serialized with `authorId` to match the public JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
}

/// Fields written on create
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

/// Full overwrite of an existing post
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
}
