//! Route handlers: validate one required field, build the stage prompt,
//! delegate to the inference port, shape the JSON response.

pub mod angles;
pub mod colors;
pub mod health;
pub mod model;
pub mod runway;
pub mod sketch;

use atelier_core::prompts::PromptBundle;
use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::HttpError;

/// Unwrap the JSON extractor, turning a malformed body into a 400.
pub(crate) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(HttpError::BadRequest(rejection.body_text())),
    }
}

/// Validate a single required field; empty counts as missing.
pub(crate) fn required(value: Option<&str>, message: &str) -> Result<String, HttpError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(HttpError::BadRequest(message.to_string())),
    }
}

/// Assemble the image-model input payload from a prompt bundle plus
/// reference images.
pub(crate) fn image_model_input(
    bundle: &PromptBundle,
    image_inputs: &[String],
) -> serde_json::Value {
    let mut input = serde_json::json!({
        "prompt": bundle.prompt,
        "output_format": "jpg",
    });
    if !image_inputs.is_empty() {
        input["image_input"] = serde_json::json!(image_inputs);
    }
    if let Some(ref negative) = bundle.negative_prompt {
        input["negative_prompt"] = serde_json::json!(negative);
    }
    if let Some(strength) = bundle.image_strength {
        input["image_strength"] = serde_json::json!(strength);
    }
    input
}
