//! Model-photo handler: photograph a model wearing the exact design.

use atelier_core::IMAGE_MODEL;
use atelier_core::prompts::model;
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

use super::{image_model_input, parse_body, required};
use crate::dto::{ModelPhotoRequest, StageImageResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn generate_model(
    State(state): State<AppState>,
    payload: Result<Json<ModelPhotoRequest>, JsonRejection>,
) -> Result<Json<StageImageResponse>, HttpError> {
    let req = parse_body(payload)?;
    let design_url = required(req.design_url.as_deref(), "Design URL is required")?;

    let bundle = model::build(
        req.model_type.as_deref().unwrap_or(model::DEFAULT_MODEL_TYPE),
        req.pose.as_deref().unwrap_or(model::DEFAULT_POSE),
    );
    let input = image_model_input(&bundle, &[design_url]);

    let image_url = state
        .inference
        .generate(IMAGE_MODEL, input, false)
        .await
        .map_err(|e| HttpError::Internal(format!("Model generation failed: {e}")))?;

    Ok(Json(StageImageResponse::new(image_url, "model")))
}
