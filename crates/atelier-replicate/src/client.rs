//! Replicate client: job submission and fixed-interval polling.

use crate::error::{ReplicateError, ReplicateResult};
use crate::http::{ReplicateBackend, ReqwestBackend};
use crate::models::{PredictionStatus, ReplicateConfig};

/// Default Replicate client using the reqwest backend.
pub type DefaultReplicateClient = ReplicateClient<ReqwestBackend>;

/// Client for running predictions end to end against the Replicate API.
///
/// Generic over the transport so the poll loop can be exercised against a
/// scripted fake; production code uses [`DefaultReplicateClient`].
pub struct ReplicateClient<B: ReplicateBackend> {
    pub(crate) backend: B,
    pub(crate) config: ReplicateConfig,
}

impl DefaultReplicateClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ReplicateConfig) -> Self {
        let backend = ReqwestBackend::new(config.clone());
        Self { backend, config }
    }
}

impl<B: ReplicateBackend> ReplicateClient<B> {
    /// Create a client with a custom backend. Use this for testing.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: ReplicateConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// Submit a job to the given model and return the job id.
    ///
    /// A missing API token is detected here, before any request is made.
    pub async fn submit(
        &self,
        model: &str,
        input: &serde_json::Value,
    ) -> ReplicateResult<String> {
        if self.config.token.is_none() {
            return Err(ReplicateError::MissingToken);
        }
        let prediction = self.backend.create_prediction(model, input).await?;
        tracing::debug!(model, prediction_id = %prediction.id, "prediction created");
        Ok(prediction.id)
    }

    /// Poll the job until it reaches a terminal state and return its output
    /// URL.
    ///
    /// The first poll happens immediately; every subsequent poll is preceded
    /// by exactly one fixed-interval sleep. `long_running` selects the
    /// extended attempt budget used for video models. Exhausting the budget
    /// is a timeout, distinct from an API-reported failure.
    pub async fn await_completion(
        &self,
        id: &str,
        long_running: bool,
    ) -> ReplicateResult<String> {
        let budget = if long_running {
            self.config.video_attempts
        } else {
            self.config.image_attempts
        };

        for attempt in 0..budget {
            if attempt > 0 {
                tokio::time::sleep(self.config.poll_interval).await;
            }

            let prediction = self.backend.get_prediction(id).await?;
            match prediction.parsed_status()? {
                PredictionStatus::Succeeded => return extract_output(prediction.output),
                PredictionStatus::Failed => {
                    return Err(ReplicateError::PredictionFailed {
                        message: prediction.error.unwrap_or_default(),
                    });
                }
                PredictionStatus::Starting | PredictionStatus::Processing => {
                    tracing::trace!(prediction_id = %id, attempt, "prediction still running");
                }
            }
        }

        Err(ReplicateError::Timeout { attempts: budget })
    }

    /// Submit a job and wait for its output.
    pub async fn generate(
        &self,
        model: &str,
        input: &serde_json::Value,
        long_running: bool,
    ) -> ReplicateResult<String> {
        let id = self.submit(model, input).await?;
        self.await_completion(&id, long_running).await
    }
}

/// Resolve a succeeded prediction's output to a single URL: the first
/// element when the output is a list, the scalar unchanged otherwise.
fn extract_output(output: Option<serde_json::Value>) -> ReplicateResult<String> {
    match output {
        Some(serde_json::Value::String(url)) => Ok(url),
        Some(serde_json::Value::Array(items)) => match items.into_iter().next() {
            Some(serde_json::Value::String(url)) => Ok(url),
            _ => Err(ReplicateError::EmptyOutput),
        },
        _ => Err(ReplicateError::EmptyOutput),
    }
}
