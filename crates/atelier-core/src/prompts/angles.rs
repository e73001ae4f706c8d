//! Multi-angle burst prompts: six fixed camera angles of the same outfit.

use super::PromptBundle;
use crate::features::GarmentFeatures;

/// Preservation strength for angle regeneration; high enough to keep the
/// outfit, loose enough to let the pose change.
pub const STRENGTH: f64 = 0.88;

const NEGATIVE: &str = "different outfit, changed design, altered colors, \
modified garment, new clothes";

/// The six camera angles of the product-view burst. The labels are part of
/// the wire contract with the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {
    Front,
    Back,
    LeftSide,
    RightSide,
    ThreeQuarterFront,
    ThreeQuarterBack,
}

impl Angle {
    /// All six angles in their fixed presentation order.
    pub const ALL: [Angle; 6] = [
        Angle::Front,
        Angle::Back,
        Angle::LeftSide,
        Angle::RightSide,
        Angle::ThreeQuarterFront,
        Angle::ThreeQuarterBack,
    ];

    /// Wire label, e.g. `three_quarter_front`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Angle::Front => "front",
            Angle::Back => "back",
            Angle::LeftSide => "left_side",
            Angle::RightSide => "right_side",
            Angle::ThreeQuarterFront => "three_quarter_front",
            Angle::ThreeQuarterBack => "three_quarter_back",
        }
    }

    /// Camera direction sentence interpolated into the prompt.
    #[must_use]
    pub const fn view(self) -> &'static str {
        match self {
            Angle::Front => "Direct front view, facing camera, full body shot",
            Angle::Back => "Back view, showing back details, full body shot",
            Angle::LeftSide => "Left side profile view, full body shot",
            Angle::RightSide => "Right side profile view, full body shot",
            Angle::ThreeQuarterFront => {
                "Three-quarter front view, 45 degree angle, full body shot"
            }
            Angle::ThreeQuarterBack => {
                "Three-quarter back view, 45 degree angle, full body shot"
            }
        }
    }
}

/// Build the prompt bundle for one camera angle.
#[must_use]
pub fn build(angle: Angle, features: &GarmentFeatures) -> PromptBundle {
    let view = angle.view();
    let feature_description = features.describe_for_angles();
    let outfit = if feature_description.is_empty() {
        "Same outfit".to_string()
    } else {
        format!("Same outfit ({feature_description})")
    };

    let prompt = format!(
        "CRITICAL: Model wearing THE EXACT SAME OUTFIT from the reference image.\n\n\
{view}\n\n\
RULES:\n\
- {outfit}, same colors, same patterns, same logos, same design - IDENTICAL to reference\n\
- Only change the camera angle/pose as specified: {view}\n\
- Clean white studio background, professional fashion photography\n\
- High-quality catalog style, detailed fabric textures\n\
- Professional lighting, no text or labels\n\n\
Think: \"Same outfit, different angle for a 360 degree product view\"",
    );

    PromptBundle::new(prompt)
        .with_negative(NEGATIVE)
        .with_strength(STRENGTH)
}
