//! Runway-walk motion prompt for the video model.

use super::PromptBundle;

pub const DEFAULT_WALK_STYLE: &str = "confident ramp walk";

/// Generation mode passed to the video model.
pub const VIDEO_MODE: &str = "pro";

/// Clip duration in seconds.
pub const VIDEO_DURATION_SECS: u64 = 10;

const NEGATIVE: &str = "static image, multiple views, composite video, cuts, \
transitions, blurry, low quality, multiple models, duplicate models, clones, \
two models, several models, group of models, other people on runway";

/// Build the runway-walk prompt bundle.
#[must_use]
pub fn build(walk_style: &str) -> PromptBundle {
    let prompt = format!(
        "Single professional fashion model walking confidently down a runway ramp, \
{walk_style}, one model only, model starts at the back of the runway and walks forward \
towards camera, smooth fluid motion, elegant confident stride, cameras flashing from \
audience, professional runway lighting, fashion week atmosphere, full body shot \
throughout the walk, high fashion presentation, cinematic quality, luxury fashion show \
environment, seamless single take video, solo model performance",
    );

    PromptBundle::new(prompt).with_negative(NEGATIVE)
}
