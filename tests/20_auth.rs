mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn missing_token_is_unauthorized() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();
    // readiness polling already pinged storage
    let baseline = server.repo.calls();

    let res = client.get(server.url("/api/v1/blog/bulk")).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    assert_eq!(res.json::<Value>().await?, json!({ "error": "unauthorized" }));

    let res = client
        .post(server.url("/api/v1/blog"))
        .json(&json!({ "title": "A", "content": "B" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client.get(server.url("/api/v1/blog/a/b")).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    assert_eq!(server.repo.calls(), baseline);
    Ok(())
}

#[tokio::test]
async fn bearer_scheme_is_not_stripped() -> Result<()> {
    let server = common::spawn_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(server.url("/api/v1/blog/bulk"))
        .header("authorization", format!("Bearer {}", server.token("u1")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = client
        .get(server.url("/api/v1/blog/bulk"))
        .header("authorization", server.token("u1"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}
