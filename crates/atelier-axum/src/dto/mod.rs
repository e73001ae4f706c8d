//! Wire DTOs for the relay endpoints.
//!
//! Field names are camelCase on the wire; they are part of the contract
//! with the existing front end.

use atelier_core::GarmentFeatures;
use serde::{Deserialize, Serialize};

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SketchRequest {
    pub prompt: Option<String>,
    pub edit_instruction: Option<String>,
    pub garment_type: Option<String>,
    pub gender: Option<String>,
    pub detailed_features: Option<GarmentFeatures>,
    pub previous_sketch_url: Option<String>,
    pub uploaded_image_url: Option<String>,
    pub uploaded_logo_url: Option<String>,
    pub use_uploaded_image: Option<bool>,
    /// Data URL of the user's canvas drawing, attached as an extra
    /// reference image on fresh generations.
    pub sketch_svg: Option<String>,
    /// Prior accepted edits, oldest first.
    pub design_history: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorsRequest {
    pub sketch_url: Option<String>,
    pub colors: Option<Vec<String>>,
    pub prompt: Option<String>,
    pub previous_colored_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelPhotoRequest {
    pub design_url: Option<String>,
    pub model_type: Option<String>,
    pub pose: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnglesRequest {
    pub model_photo_url: Option<String>,
    pub detailed_features: Option<GarmentFeatures>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RampWalkRequest {
    pub model_photo_url: Option<String>,
    pub walk_style: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// Response for the single-image stages (sketch, colors, model photo).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageImageResponse {
    pub image_url: String,
    pub success: bool,
    pub step: &'static str,
}

impl StageImageResponse {
    pub fn new(image_url: String, step: &'static str) -> Self {
        Self {
            image_url,
            success: true,
            step,
        }
    }
}

/// One successfully generated camera angle.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleView {
    pub angle: &'static str,
    pub image_url: String,
}

/// Response for the six-angle burst: whichever angles succeeded, plus a
/// representative image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnglesResponse {
    pub image_url: String,
    pub all_views: Vec<AngleView>,
    pub success: bool,
    pub step: &'static str,
    pub model: &'static str,
    pub view_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RampWalkResponse {
    pub video_url: String,
    pub success: bool,
    pub step: &'static str,
}

/// Liveness plus configuration presence.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub env_check: EnvCheck,
}

#[derive(Debug, Serialize)]
pub struct EnvCheck {
    pub replicate_token: bool,
    pub model_id: String,
    pub prompt_template: bool,
}
