//! Internal error types for Replicate operations.
//!
//! These errors are internal to `atelier-replicate` and are mapped to the
//! core `InferenceError` port error at the boundary.

use thiserror::Error;

/// Result type alias for Replicate operations.
pub type ReplicateResult<T> = Result<T, ReplicateError>;

/// Errors related to Replicate API operations.
#[derive(Debug, Error)]
pub enum ReplicateError {
    /// No API token was configured; detected before any request is made.
    #[error("REPLICATE_API_TOKEN not configured")]
    MissingToken,

    /// The API answered with an unexpected HTTP status. The raw response
    /// body is kept for diagnosis.
    #[error("API Error: {status} - {body}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The API body could not be parsed as JSON.
    #[error("Parse Error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Network or HTTP client error.
    #[error("Request Error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service reported the prediction failed.
    #[error("Prediction failed: {message}")]
    PredictionFailed {
        /// Error message reported by the service
        message: String,
    },

    /// The service reported a status outside the documented set.
    #[error("Unknown status: {status}")]
    UnexpectedStatus {
        /// The raw status string
        status: String,
    },

    /// The attempt budget ran out while the prediction stayed non-terminal.
    #[error("Prediction timeout")]
    Timeout {
        /// How many status fetches were made before giving up
        attempts: u32,
    },

    /// The prediction succeeded but carried no usable output URL.
    #[error("No output URL returned from the prediction")]
    EmptyOutput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_request_failed_embeds_status_and_body() {
        let error = ReplicateError::ApiRequestFailed {
            status: 429,
            body: r#"{"detail":"rate limited"}"#.to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("rate limited"));
    }

    #[test]
    fn unexpected_status_keeps_the_raw_string() {
        let error = ReplicateError::UnexpectedStatus {
            status: "canceled".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown status: canceled");
    }

    #[test]
    fn timeout_is_distinct_from_job_failure() {
        let timeout = ReplicateError::Timeout { attempts: 60 };
        let failed = ReplicateError::PredictionFailed {
            message: "NSFW content detected".to_string(),
        };
        assert_eq!(timeout.to_string(), "Prediction timeout");
        assert!(failed.to_string().contains("NSFW"));
    }
}
