pub mod auth;

pub use auth::{blog_fallback, jwt_auth_middleware, AuthUser};
