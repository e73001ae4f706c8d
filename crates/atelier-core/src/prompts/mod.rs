//! Per-stage prompt builders.
//!
//! Each pipeline stage (sketch, colors, model photo, angles, runway video)
//! has its own template with its own preservation-strength parameter. The
//! builders are pure functions over the user-supplied fields; the exact
//! strength values and angle labels are part of the contract with the
//! existing front end and must not drift.

pub mod angles;
pub mod colors;
pub mod model;
pub mod runway;
pub mod sketch;

pub use angles::Angle;
pub use colors::ColorMode;
pub use sketch::SketchMode;

/// A built prompt plus its companion negative prompt and, for image-to-image
/// stages, the preservation strength passed alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptBundle {
    pub prompt: String,
    pub negative_prompt: Option<String>,
    pub image_strength: Option<f64>,
}

impl PromptBundle {
    pub(crate) fn new(prompt: String) -> Self {
        Self {
            prompt,
            negative_prompt: None,
            image_strength: None,
        }
    }

    pub(crate) fn with_negative(mut self, negative: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative.into());
        self
    }

    pub(crate) fn with_strength(mut self, strength: f64) -> Self {
        self.image_strength = Some(strength);
        self
    }
}
