//! Ramp-walk handler: runway video from the model photo.

use atelier_core::VIDEO_MODEL;
use atelier_core::prompts::runway;
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

use super::{parse_body, required};
use crate::dto::{RampWalkRequest, RampWalkResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn generate_ramp_walk(
    State(state): State<AppState>,
    payload: Result<Json<RampWalkRequest>, JsonRejection>,
) -> Result<Json<RampWalkResponse>, HttpError> {
    let req = parse_body(payload)?;
    let photo_url = required(
        req.model_photo_url.as_deref(),
        "Model photo URL is required",
    )?;

    if !state.config.has_token() {
        return Err(HttpError::Internal(
            "REPLICATE_API_TOKEN not configured".to_string(),
        ));
    }

    let walk_style = req
        .walk_style
        .as_deref()
        .unwrap_or(runway::DEFAULT_WALK_STYLE);
    let bundle = runway::build(walk_style);

    let input = serde_json::json!({
        "mode": runway::VIDEO_MODE,
        "prompt": bundle.prompt,
        "duration": runway::VIDEO_DURATION_SECS,
        "start_image": photo_url,
        "negative_prompt": bundle.negative_prompt,
    });

    tracing::info!(walk_style, "generating ramp walk video");
    let video_url = state
        .inference
        .generate(VIDEO_MODEL, input, true)
        .await
        .map_err(|e| HttpError::Internal(format!("Ramp walk video generation failed: {e}")))?;

    tracing::info!(%video_url, "ramp walk video generated");
    Ok(Json(RampWalkResponse {
        video_url,
        success: true,
        step: "ramp-walk",
    }))
}
