use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use blog_api_rust::auth::{generate_jwt, Claims};
use blog_api_rust::config::AppConfig;
use blog_api_rust::database::InMemoryPostRepository;
use blog_api_rust::{app, AppState};
use reqwest::StatusCode;

pub const SECRET: &str = "integration-secret";

pub struct TestServer {
    pub base_url: String,
    pub repo: Arc<InMemoryPostRepository>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn token(&self, user_id: &str) -> String {
        generate_jwt(&Claims::new(user_id, 1), SECRET).expect("sign token")
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

/// Serve the app on a free port, backed by an in-memory store. The server lives as long
/// as the calling test's runtime.
pub async fn spawn_server() -> Result<TestServer> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let config = AppConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("postgres://localhost/blog_integration".to_string()),
        "JWT_SECRET" => Some(SECRET.to_string()),
        _ => None,
    })?;
    let repo = Arc::new(InMemoryPostRepository::new());
    let router = app(AppState::new(config, repo.clone()));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let server = TestServer { base_url, repo };
    server.wait_ready(Duration::from_secs(5)).await?;
    Ok(server)
}
