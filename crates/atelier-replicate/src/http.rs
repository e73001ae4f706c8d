//! HTTP backend abstraction for the Replicate API.
//!
//! The backend trait allows dependency injection of the transport so the
//! poll loop can be tested against a scripted fake. The production
//! implementation uses reqwest. There is deliberately no retry here: a
//! single request failure propagates immediately.

use async_trait::async_trait;

use crate::error::{ReplicateError, ReplicateResult};
use crate::models::{Prediction, ReplicateConfig};

/// Transport trait for the two Replicate API calls the relay makes.
///
/// This is an implementation detail - external code should use
/// `DefaultReplicateClient` through the `InferencePort` trait.
#[async_trait]
pub trait ReplicateBackend: Send + Sync {
    /// Submit a prediction for `model` and return the created resource.
    async fn create_prediction(
        &self,
        model: &str,
        input: &serde_json::Value,
    ) -> ReplicateResult<Prediction>;

    /// Fetch the current state of a prediction.
    async fn get_prediction(&self, id: &str) -> ReplicateResult<Prediction>;
}

/// Production backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
    config: ReplicateConfig,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: ReplicateConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client, config }
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.config.token.as_deref() {
            Some(token) => request.header("Authorization", format!("Token {token}")),
            None => request,
        }
    }

    /// Read the body and parse it as a prediction, keeping JSON failures
    /// distinct from transport failures.
    async fn parse_prediction(response: reqwest::Response) -> ReplicateResult<Prediction> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ReplicateBackend for ReqwestBackend {
    async fn create_prediction(
        &self,
        model: &str,
        input: &serde_json::Value,
    ) -> ReplicateResult<Prediction> {
        let url = self.config.predictions_url(model);
        let response = self
            .authorize(self.client.post(url))
            .json(&serde_json::json!({ "input": input }))
            .send()
            .await?;

        let status = response.status();
        // 201 Created is the only success answer for job submission.
        if status.as_u16() != 201 {
            return Err(ReplicateError::ApiRequestFailed {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Self::parse_prediction(response).await
    }

    async fn get_prediction(&self, id: &str) -> ReplicateResult<Prediction> {
        let url = self.config.prediction_status_url(id);
        let response = self.authorize(self.client.get(url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplicateError::ApiRequestFailed {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Self::parse_prediction(response).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
