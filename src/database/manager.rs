use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::AppConfig;

use super::repository::RepositoryError;

/// Builds and tears down the Postgres pool shared by the repository
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool described by `config`. Connection failures surface at startup
    /// rather than on the first request.
    pub async fn connect(config: &AppConfig) -> Result<PgPool, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .acquire_timeout(Duration::from_secs(config.database.connection_timeout))
            .connect(&config.database.url)
            .await?;

        info!(
            "Created database pool for {} (max {} connections)",
            config.redacted_database_url(),
            config.database.max_connections
        );
        Ok(pool)
    }

    /// Pings the pool to ensure connectivity
    pub async fn health_check(pool: &PgPool) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }

    /// Close the pool on shutdown
    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }
}
