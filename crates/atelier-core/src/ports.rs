//! Port definitions for external services.
//!
//! Adapters implement these traits; handlers depend on them. Concrete error
//! types stay internal to the adapter crates and are mapped to the port
//! errors at the boundary.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced through the inference port.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The relay is missing required configuration (API token).
    #[error("{0}")]
    Configuration(String),

    /// The upstream service rejected the request or returned garbage.
    #[error("{0}")]
    Upstream(String),

    /// The upstream service accepted the job but reported it failed.
    #[error("Prediction failed: {0}")]
    JobFailed(String),

    /// The attempt budget was exhausted while the job stayed non-terminal.
    #[error("Prediction timeout")]
    Timeout,
}

/// Port through which handlers run a generation job end to end.
///
/// `generate` submits `input` to the hosted model identified by `model`,
/// polls until the job reaches a terminal state, and resolves with the
/// output URL. `long_running` selects the extended attempt budget used for
/// video models.
#[async_trait]
pub trait InferencePort: Send + Sync {
    async fn generate(
        &self,
        model: &str,
        input: serde_json::Value,
        long_running: bool,
    ) -> Result<String, InferenceError>;
}
