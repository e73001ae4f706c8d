//! Sketch handler: fresh technical sketch or micro-edit of a prior one.

use atelier_core::IMAGE_MODEL;
use atelier_core::prompts::{SketchMode, sketch};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};

use super::{image_model_input, parse_body, required};
use crate::dto::{SketchRequest, StageImageResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn generate_sketch(
    State(state): State<AppState>,
    payload: Result<Json<SketchRequest>, JsonRejection>,
) -> Result<Json<StageImageResponse>, HttpError> {
    let req = parse_body(payload)?;
    let prompt = required(req.prompt.as_deref(), "Prompt is required")?;

    if !state.config.has_token() {
        return Err(HttpError::Internal(
            "REPLICATE_API_TOKEN not configured".to_string(),
        ));
    }

    let features = req.detailed_features.clone().unwrap_or_default();
    let history = req.design_history.clone().unwrap_or_default();

    // Refinement is decided by the presence of a base image, not a mode
    // flag: the uploaded photo when the client opted into it, else the
    // previous sketch.
    let base_image = if req.use_uploaded_image.unwrap_or(false) && req.uploaded_image_url.is_some()
    {
        req.uploaded_image_url.clone()
    } else {
        req.previous_sketch_url.clone()
    };

    let (bundle, image_inputs) = match base_image {
        Some(base) => {
            let change = req.edit_instruction.as_deref().unwrap_or(&prompt);
            tracing::info!(change, "refining existing sketch");
            let bundle = sketch::build(&SketchMode::Refine {
                change,
                context: &prompt,
                history: &history,
            });
            // The logo is never re-attached in refine mode; it is already
            // part of the base image.
            (bundle, vec![base])
        }
        None => {
            let has_logo = req.uploaded_logo_url.is_some();
            tracing::info!(has_logo, "generating new sketch");
            let bundle = sketch::build(&SketchMode::Fresh {
                prompt: &prompt,
                garment_type: req.garment_type.as_deref(),
                gender: req.gender.as_deref(),
                features: &features,
                has_logo,
            });
            let mut inputs = Vec::new();
            if let Some(logo) = req.uploaded_logo_url.clone() {
                inputs.push(logo);
            }
            if let Some(canvas) = req.sketch_svg.clone() {
                inputs.push(canvas);
            }
            (bundle, inputs)
        }
    };

    let input = image_model_input(&bundle, &image_inputs);
    let image_url = state
        .inference
        .generate(IMAGE_MODEL, input, false)
        .await
        .map_err(|e| HttpError::Internal(format!("Generation failed: {e}")))?;

    tracing::info!(%image_url, "sketch generated");
    Ok(Json(StageImageResponse::new(image_url, "sketch")))
}
