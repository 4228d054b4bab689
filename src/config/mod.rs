use std::env;
use thiserror::Error;

/// Errors raised while assembling configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(&'static str),

    #[error("Invalid database URL: {0}")]
    InvalidDatabaseUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    pub cors_origins: Vec<String>,
}

const DEFAULT_PORT: u16 = 8787;

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. `from_env` delegates here so
    /// tests never have to mutate the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            Some("staging") | Some("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        url::Url::parse(&database_url)?;

        let jwt_secret = lookup("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let mut config = Self::preset(environment, database_url, jwt_secret);

        if let Some(port) = lookup("BLOG_API_PORT")
            .or_else(|| lookup("PORT"))
            .and_then(|s| s.parse::<u16>().ok())
        {
            config.port = port;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            config.database.max_connections = v.parse().unwrap_or(config.database.max_connections);
        }
        if let Some(v) = lookup("DATABASE_CONNECTION_TIMEOUT") {
            config.database.connection_timeout = v.parse().unwrap_or(config.database.connection_timeout);
        }
        if let Some(v) = lookup("SECURITY_CORS_ORIGINS") {
            config.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(v) = lookup("SECURITY_JWT_EXPIRY_HOURS") {
            config.security.jwt_expiry_hours = v.parse().unwrap_or(config.security.jwt_expiry_hours);
        }

        Ok(config)
    }

    fn preset(environment: Environment, url: String, jwt_secret: String) -> Self {
        let (max_connections, connection_timeout, jwt_expiry_hours, cors_origins) = match environment {
            Environment::Development => (5, 30, 24 * 7, vec!["*".to_string()]),
            Environment::Staging => (10, 10, 24, vec!["https://staging.example.com".to_string()]),
            Environment::Production => (20, 5, 4, vec!["https://app.example.com".to_string()]),
        };

        Self {
            environment,
            port: DEFAULT_PORT,
            database: DatabaseConfig {
                url,
                max_connections,
                connection_timeout,
            },
            security: SecurityConfig {
                jwt_secret,
                jwt_expiry_hours,
                cors_origins,
            },
        }
    }

    /// Database URL with the password masked, safe to log.
    pub fn redacted_database_url(&self) -> String {
        match url::Url::parse(&self.database.url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.into()
            }
            Err(_) => "<invalid database url>".to_string(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}
