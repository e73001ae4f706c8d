//! Colors handler: colorize a sketch or recolor a previous colored design.

use atelier_core::IMAGE_MODEL;
use atelier_core::prompts::{ColorMode, colors};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

use super::{image_model_input, parse_body, required};
use crate::dto::{ColorsRequest, StageImageResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn add_colors(
    State(state): State<AppState>,
    payload: Result<Json<ColorsRequest>, JsonRejection>,
) -> Result<Json<StageImageResponse>, HttpError> {
    let req = parse_body(payload)?;
    let sketch_url = required(req.sketch_url.as_deref(), "Sketch URL is required")?;

    let palette = req.colors.clone().unwrap_or_default();
    let (mode, reference) = match req.previous_colored_url.clone() {
        Some(previous) => (ColorMode::Refine, previous),
        None => (ColorMode::Initial, sketch_url),
    };
    tracing::info!(?mode, palette_len = palette.len(), "adding colors");

    let bundle = colors::build(mode, &palette, req.prompt.as_deref());
    let input = image_model_input(&bundle, &[reference]);

    let image_url = state
        .inference
        .generate(IMAGE_MODEL, input, false)
        .await
        .map_err(|e| HttpError::Internal(format!("Color generation failed: {e}")))?;

    Ok(Json(StageImageResponse::new(image_url, "colored")))
}
