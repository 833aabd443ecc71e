use anyhow::Context;
use ban_checker::{app, config::Config, AppState};
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    for (name, value) in [
        ("STEAM_API_KEY", &config.steam_api_key),
        ("TWITTER_BEARER_TOKEN", &config.twitter_bearer_token),
        ("YOUTUBE_API_KEY", &config.youtube_api_key),
    ] {
        if value.is_none() {
            tracing::warn!("{} not set; its check will answer with an error", name);
        }
    }

    let addr = config
        .bind_address()
        .parse::<SocketAddr>()
        .context("Invalid address")?;

    let state = Arc::new(AppState::new(config).context("Failed to build HTTP client")?);

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
