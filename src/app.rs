use std::sync::Arc;

use axum::{
    http::HeaderValue,
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::PostRepository;
use crate::handlers;
use crate::middleware::{blog_fallback, jwt_auth_middleware};

pub const BLOG_BASE_PATH: &str = "/api/v1/blog";

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    pub fn new(config: AppConfig, posts: Arc<dyn PostRepository>) -> Self {
        Self {
            config: Arc::new(config),
            posts,
        }
    }
}

/// Full application router with global middleware applied
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        // Token required
        .merge(blog_routes(state.clone()))
        .fallback(blog_fallback)
        // Global middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn blog_routes(state: AppState) -> Router<AppState> {
    use axum::routing::post;
    use handlers::blog;

    let collection = post(blog::create_post).put(blog::update_post);

    Router::new()
        .route(BLOG_BASE_PATH, collection.clone())
        .route(&format!("{}/", BLOG_BASE_PATH), collection)
        .route(&format!("{}/bulk", BLOG_BASE_PATH), get(blog::list_posts))
        .route(&format!("{}/:id", BLOG_BASE_PATH), get(blog::get_post))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = &config.security.cors_origins;
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
