//! Angles handler: six-way fan-out, keep the survivors.

use atelier_core::IMAGE_MODEL;
use atelier_core::prompts::{Angle, angles};
use axum::Json;
use axum::extract::{State, rejection::JsonRejection};
use futures_util::future::join_all;

use super::{image_model_input, parse_body, required};
use crate::dto::{AngleView, AnglesRequest, AnglesResponse};
use crate::error::HttpError;
use crate::state::AppState;

pub async fn generate_angles(
    State(state): State<AppState>,
    payload: Result<Json<AnglesRequest>, JsonRejection>,
) -> Result<Json<AnglesResponse>, HttpError> {
    let req = parse_body(payload)?;
    let photo_url = required(
        req.model_photo_url.as_deref(),
        "Model photo URL is required",
    )?;
    let features = req.detailed_features.clone().unwrap_or_default();

    tracing::info!("generating 6 angle views in parallel");

    // Six independent submit+poll flows; each owns its own job id and poll
    // loop. Wait for all to settle and keep whichever succeed.
    let tasks = Angle::ALL.map(|angle| {
        let bundle = angles::build(angle, &features);
        let input = image_model_input(&bundle, std::slice::from_ref(&photo_url));
        let state = state.clone();
        async move {
            match state.inference.generate(IMAGE_MODEL, input, false).await {
                Ok(image_url) => {
                    tracing::info!(angle = angle.label(), "angle view generated");
                    Some(AngleView {
                        angle: angle.label(),
                        image_url,
                    })
                }
                Err(error) => {
                    tracing::warn!(angle = angle.label(), %error, "angle view failed");
                    None
                }
            }
        }
    });

    let views: Vec<AngleView> = join_all(tasks).await.into_iter().flatten().collect();

    if views.is_empty() {
        return Err(HttpError::Internal(
            "Different angle view generation failed: Failed to generate any angle views"
                .to_string(),
        ));
    }

    tracing::info!(count = views.len(), "angle views generated");
    Ok(Json(AnglesResponse {
        image_url: views[0].image_url.clone(),
        view_count: views.len(),
        all_views: views,
        success: true,
        step: "angles",
        model: "nano-banana",
    }))
}
