// handlers/blog/mod.rs - post CRUD under /api/v1/blog
//
// Every handler here runs after jwt_auth_middleware, so an AuthUser extension is
// always present.
pub mod create;
pub mod get;
pub mod list;
pub mod update;

pub use create::create_post;
pub use get::get_post;
pub use list::list_posts;
pub use update::update_post;
