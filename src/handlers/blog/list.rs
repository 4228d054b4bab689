use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiResult;

// TODO: add pagination once the client can page through results
/// GET /api/v1/blog/bulk - every post, unpaginated
pub async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let blogs = state.posts.find_many().await?;
    Ok(Json(json!({ "blogs": blogs })))
}
