//! Relay server entry point.
//!
//! No command-line flags: the server reads `.env` from the working
//! directory and listens on the fixed local port.

use anyhow::Result;
use atelier_axum::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    atelier_axum::start_server(ServerConfig::default()).await
}
