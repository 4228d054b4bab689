use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::app::{AppState, BLOG_BASE_PATH};
use crate::auth::{verify_jwt, Claims};
use crate::error::ApiError;

/// Authenticated caller extracted from the token
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self { user_id: claims.id }
    }
}

/// Verifies the raw `authorization` header and injects `AuthUser` into the request.
/// Any failure short-circuits with 403 `{"error": "unauthorized"}`.
pub async fn jwt_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = authenticate(request.headers(), &state.config.security.jwt_secret).map_err(|e| {
        tracing::debug!("Rejected {} {}", request.method(), request.uri().path());
        e
    })?;

    tracing::debug!("Authenticated user {}", auth_user.user_id);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Fallback for the whole app. Paths under the blog base that match no route still
/// demand a token, so a caller without one sees 403 rather than 404.
pub async fn blog_fallback(State(state): State<AppState>, request: Request) -> Response {
    let path = request.uri().path();
    let under_blog = path == BLOG_BASE_PATH || path.starts_with(&format!("{}/", BLOG_BASE_PATH));

    if under_blog {
        if let Err(e) = authenticate(request.headers(), &state.config.security.jwt_secret) {
            tracing::debug!("Rejected unmatched {} {}", request.method(), path);
            return e.into_response();
        }
    }

    StatusCode::NOT_FOUND.into_response()
}

fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthUser, ApiError> {
    let claims = verify_jwt(extract_token(headers), secret).map_err(|e| {
        tracing::debug!("Token verification failed: {}", e);
        ApiError::Unauthorized
    })?;
    Ok(AuthUser::from(claims))
}

/// The header carries the token itself, without a `Bearer ` scheme. Missing or
/// non-ASCII headers read as empty.
fn extract_token(headers: &HeaderMap) -> &str {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
