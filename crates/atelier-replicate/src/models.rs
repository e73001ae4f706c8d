//! Wire types and client configuration for the Replicate API.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ReplicateError;

/// A prediction resource as returned by the Replicate API.
///
/// `status` is kept as the raw string so an out-of-contract value can be
/// surfaced verbatim instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub output: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Prediction {
    /// Parse the raw status string into the documented state set.
    pub fn parsed_status(&self) -> Result<PredictionStatus, ReplicateError> {
        match self.status.as_str() {
            "starting" => Ok(PredictionStatus::Starting),
            "processing" => Ok(PredictionStatus::Processing),
            "succeeded" => Ok(PredictionStatus::Succeeded),
            "failed" => Ok(PredictionStatus::Failed),
            other => Err(ReplicateError::UnexpectedStatus {
                status: other.to_string(),
            }),
        }
    }
}

/// Documented prediction states. Anything else is a protocol violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
}

impl PredictionStatus {
    /// Whether this state ends the poll loop.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Configuration for the Replicate client.
///
/// The attempt budgets exist because image and video models have wildly
/// different latency profiles: 60 polls at 5 seconds is about 5 minutes,
/// 240 polls about 20 minutes.
#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    /// Base URL of the Replicate API.
    pub(crate) base_url: Url,
    /// API token; `None` fails at submission time, not construction time.
    pub(crate) token: Option<String>,
    /// Per-request timeout for the HTTP client.
    pub(crate) request_timeout: Duration,
    /// Fixed delay between consecutive status polls.
    pub(crate) poll_interval: Duration,
    /// Attempt budget for ordinary (image) predictions.
    pub(crate) image_attempts: u32,
    /// Attempt budget for long-running (video) predictions.
    pub(crate) video_attempts: u32,
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://api.replicate.com")
                .expect("default Replicate API URL is valid"),
            token: None,
            request_timeout: Duration::from_secs(30),
            poll_interval: Duration::from_secs(5),
            image_attempts: 60,
            video_attempts: 240,
        }
    }
}

impl ReplicateConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL for the Replicate API.
    #[must_use]
    pub fn with_base_url(mut self, url: Url) -> Self {
        self.base_url = url;
        self
    }

    /// Set an optional API token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Set the delay between status polls. Defaults to 5 seconds.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the attempt budgets for ordinary and long-running predictions.
    #[must_use]
    pub const fn with_attempt_budgets(mut self, image: u32, video: u32) -> Self {
        self.image_attempts = image;
        self.video_attempts = video;
        self
    }

    /// URL for submitting a prediction to the given model.
    pub(crate) fn predictions_url(&self, model: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}/v1/models/{model}/predictions"));
        url
    }

    /// URL for fetching the state of a prediction.
    pub(crate) fn prediction_status_url(&self, id: &str) -> Url {
        let mut url = self.base_url.clone();
        let base_path = url.path().trim_end_matches('/');
        url.set_path(&format!("{base_path}/v1/predictions/{id}"));
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_service_profile() {
        let config = ReplicateConfig::default();
        assert_eq!(config.base_url.as_str(), "https://api.replicate.com/");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.image_attempts, 60);
        assert_eq!(config.video_attempts, 240);
        assert!(config.token.is_none());
    }

    #[test]
    fn urls_are_built_from_the_base() {
        let config = ReplicateConfig::new()
            .with_base_url(Url::parse("https://api.example.com/").unwrap());
        assert_eq!(
            config.predictions_url("google/nano-banana").as_str(),
            "https://api.example.com/v1/models/google/nano-banana/predictions"
        );
        assert_eq!(
            config.prediction_status_url("p123").as_str(),
            "https://api.example.com/v1/predictions/p123"
        );
    }

    #[test]
    fn url_building_tolerates_a_base_path() {
        let config = ReplicateConfig::new()
            .with_base_url(Url::parse("https://proxy.example.com/replicate/").unwrap());
        assert_eq!(
            config.prediction_status_url("p123").as_str(),
            "https://proxy.example.com/replicate/v1/predictions/p123"
        );
    }

    #[test]
    fn parses_documented_statuses() {
        let prediction = |status: &str| Prediction {
            id: "p".into(),
            status: status.into(),
            output: None,
            error: None,
        };
        assert_eq!(
            prediction("starting").parsed_status().unwrap(),
            PredictionStatus::Starting
        );
        assert!(PredictionStatus::Succeeded.is_terminal());
        assert!(!PredictionStatus::Processing.is_terminal());
        assert!(matches!(
            prediction("canceled").parsed_status(),
            Err(ReplicateError::UnexpectedStatus { status }) if status == "canceled"
        ));
    }

    #[test]
    fn deserializes_a_prediction_body() {
        let prediction: Prediction = serde_json::from_str(
            r#"{"id": "p42", "status": "succeeded", "output": ["https://cdn/x.jpg"]}"#,
        )
        .unwrap();
        assert_eq!(prediction.id, "p42");
        assert!(prediction.error.is_none());
        assert!(prediction.output.is_some());
    }
}
