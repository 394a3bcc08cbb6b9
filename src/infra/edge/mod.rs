pub mod router;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

pub async fn serve(bind_addr: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind edge listener on {bind_addr}"))?;
    tracing::info!(%bind_addr, "edge endpoint listening");
    axum::serve(listener, router::router())
        .await
        .context("edge server stopped unexpectedly")
}
