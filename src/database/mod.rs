pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::DatabaseManager;
pub use memory::InMemoryPostRepository;
pub use models::{NewPost, Post, PostUpdate};
pub use postgres::PgPostRepository;
pub use repository::{PostRepository, RepositoryError};
