// handlers/mod.rs - route handlers by access tier
//
// public: no authentication (service descriptor, health)
// blog:   token required, mounted under /api/v1/blog behind jwt_auth_middleware
pub mod blog;
pub mod public;
