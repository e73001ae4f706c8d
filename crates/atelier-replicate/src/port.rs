//! `InferencePort` implementation: maps internal errors to port errors.

use async_trait::async_trait;

use atelier_core::ports::{InferenceError, InferencePort};

use crate::client::ReplicateClient;
use crate::error::ReplicateError;
use crate::http::ReplicateBackend;

impl From<ReplicateError> for InferenceError {
    fn from(err: ReplicateError) -> Self {
        match err {
            ReplicateError::MissingToken => InferenceError::Configuration(err.to_string()),
            ReplicateError::PredictionFailed { message } => InferenceError::JobFailed(message),
            ReplicateError::Timeout { .. } => InferenceError::Timeout,
            ReplicateError::ApiRequestFailed { .. }
            | ReplicateError::JsonParse(_)
            | ReplicateError::Network(_)
            | ReplicateError::UnexpectedStatus { .. }
            | ReplicateError::EmptyOutput => InferenceError::Upstream(err.to_string()),
        }
    }
}

#[async_trait]
impl<B: ReplicateBackend> InferencePort for ReplicateClient<B> {
    async fn generate(
        &self,
        model: &str,
        input: serde_json::Value,
        long_running: bool,
    ) -> Result<String, InferenceError> {
        Ok(ReplicateClient::generate(self, model, &input, long_running).await?)
    }
}
