use anyhow::Context;
use clap::Args;
use serde_json::Value;

#[derive(Args, Debug)]
pub struct PingArgs {
    #[arg(long, default_value = "http://127.0.0.1:8787", help = "Base URL of the server")]
    pub url: String,
}

pub async fn handle(args: PingArgs) -> anyhow::Result<()> {
    let url = format!("{}/health", args.url.trim_end_matches('/'));
    let res = reqwest::get(&url)
        .await
        .with_context(|| format!("failed to reach {}", url))?;

    let status = res.status();
    let body: Value = res.json().await.context("health response was not JSON")?;
    println!("{}", serde_json::to_string_pretty(&body)?);

    if !status.is_success() {
        anyhow::bail!("server reported {}", status);
    }
    Ok(())
}
