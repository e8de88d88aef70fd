use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use workspace_api::ping::{self, PING_ADDR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let listener = TcpListener::bind(PING_ADDR)
        .await
        .with_context(|| format!("failed to bind {}", PING_ADDR))?;

    tracing::info!("Ping responder listening on http://{}", PING_ADDR);
    ping::serve(listener).await?;
    Ok(())
}
