use axum::{body::Bytes, extract::State, Extension, Json};
use serde_json::{json, Value};

use crate::api::{parse_json_body, validate_blog_input};
use crate::app::AppState;
use crate::database::PostUpdate;
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;

/// PUT /api/v1/blog - overwrite title, content and author of `body.id`
///
/// The body is checked with the create shape only, so `id` is not validated up front.
/// A missing id, or one that matches no post, ends up as an unhandled 500. Authorship
/// moves to whoever calls update; there is no ownership check.
pub async fn update_post(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> ApiResult<Json<Value>> {
    let body = parse_json_body(&body)?;
    let input = validate_blog_input(&body)?;

    let id = body
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::internal("update body has no string id"))?;

    let post = state
        .posts
        .update(PostUpdate {
            id: id.to_string(),
            title: input.title.to_string(),
            content: input.content.to_string(),
            author_id: user.user_id,
        })
        .await?;

    tracing::info!("Updated post {}", post.id);
    Ok(Json(json!({ "id": post.id })))
}
