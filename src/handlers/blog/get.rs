use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::{ApiError, ApiResult};

/// GET /api/v1/blog/:id - first post with the given id, or `null`
///
/// Unlike the other routes, lookup failures are caught here and reported as 411.
pub async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Value>> {
    let blog = state.posts.find_first(&id).await.map_err(|e| {
        tracing::warn!("Failed to fetch post {}: {}", id, e);
        ApiError::FetchError
    })?;

    Ok(Json(json!({ "blog": blog })))
}
