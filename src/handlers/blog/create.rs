use axum::{body::Bytes, extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::api::{parse_json_body, validate_blog_input};
use crate::app::AppState;
use crate::database::NewPost;
use crate::error::ApiResult;
use crate::middleware::AuthUser;

/// POST /api/v1/blog - create a post authored by the caller
pub async fn create_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let body = parse_json_body(&body)?;
    let input = validate_blog_input(&body)?;

    let post = state
        .posts
        .create(NewPost {
            title: input.title.to_string(),
            content: input.content.to_string(),
            author_id: user.user_id,
        })
        .await?;

    tracing::info!("Created post {}", post.id);
    Ok(Json(json!({ "id": post.id })))
}
