//! Bare connectivity responder: every request gets `200 ok`.

use axum::{
    http::{Method, Uri},
    Router,
};
use tokio::net::TcpListener;

/// Fixed loopback address the `workspace-ping` binary binds
pub const PING_ADDR: &str = "127.0.0.1:3001";

pub fn router() -> Router {
    Router::new().fallback(respond)
}

async fn respond(method: Method, uri: Uri) -> &'static str {
    tracing::info!("{} {}", method, uri.path());
    "ok"
}

pub async fn serve(listener: TcpListener) -> std::io::Result<()> {
    axum::serve(listener, router()).await
}
