//! Server bootstrap - the composition root.
//!
//! This is the only place where infrastructure is wired together for the
//! web adapter: the env file is read into an immutable `RelayConfig` and
//! the concrete Replicate client is constructed and injected behind the
//! `InferencePort` trait.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use atelier_core::config::RelayConfig;
use atelier_core::ports::InferencePort;
use atelier_replicate::{DefaultReplicateClient, ReplicateConfig};

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (the front end is served from another port).
    #[default]
    AllowAll,
    /// Allow specific origins.
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the key=value environment file.
    pub env_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            env_path: PathBuf::from(".env"),
            cors: CorsConfig::default(),
        }
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Immutable relay configuration, read once at startup.
    pub config: RelayConfig,
    /// Inference client as trait object.
    pub inference: Arc<dyn InferencePort>,
}

/// Wire up the relay: load configuration and construct the client.
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    let relay_config = RelayConfig::from_env_file(&config.env_path);

    let client = DefaultReplicateClient::new(
        ReplicateConfig::new().with_optional_token(relay_config.replicate_token.clone()),
    );

    AxumContext {
        config: relay_config,
        inference: Arc::new(client),
    }
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    let ctx = bootstrap(&config);

    if ctx.config.has_token() {
        info!("REPLICATE_API_TOKEN: set");
    } else {
        warn!("REPLICATE_API_TOKEN: missing - generation endpoints will fail");
    }
    info!(
        "MODEL_ID: {}",
        ctx.config.model_id.as_deref().unwrap_or("using default")
    );
    info!(
        "PROMPT_TEMPLATE: {}",
        ctx.config
            .prompt_template
            .as_deref()
            .unwrap_or("using default")
    );

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("atelier relay server listening on http://{}", addr);
    info!("health check: http://localhost:{}/api/health", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
