//! Model-photo prompt: photograph a model wearing the exact garment.

use super::PromptBundle;

/// Preservation strength forcing the photographed garment to match the
/// reference design.
pub const STRENGTH: f64 = 0.92;

pub const DEFAULT_MODEL_TYPE: &str = "diverse fashion model";
pub const DEFAULT_POSE: &str = "standing";

const NEGATIVE: &str = "different outfit, different garment, changed design, \
altered colors, modified patterns, blue jacket, blazer, suit, dress clothes, \
business attire, different clothing, new design, redesigned clothes, similar \
style, inspired by, alternative version, different interpretation, wrong \
garment type";

/// Build the model-photo prompt bundle.
#[must_use]
pub fn build(model_type: &str, pose: &str) -> PromptBundle {
    let prompt = format!(
        "CRITICAL INSTRUCTION - READ CAREFULLY\n\n\
YOUR TASK: Create a photorealistic fashion photograph where a model is wearing \
THE EXACT GARMENT shown in the reference image.\n\n\
STEP-BY-STEP PROCESS:\n\
1. LOOK at the reference image - this shows the EXACT outfit design (it may be a sketch \
or colored design)\n\
2. MEMORIZE every detail: colors, patterns, logos, graphics, text, placement, style\n\
3. CREATE a professional photograph of a {model_type} in {pose} pose\n\
4. The model MUST be wearing THIS EXACT GARMENT - copy it pixel-perfect\n\
5. Studio lighting, clean background, high fashion editorial style\n\n\
ABSOLUTE REQUIREMENTS - NO EXCEPTIONS:\n\
- SAME EXACT COLORS (if black hoodie in reference, black hoodie in photo)\n\
- SAME EXACT PATTERNS (any sleeve pattern appears identically in the photo)\n\
- SAME EXACT LOGOS (any text or logo on the garment appears identically in the photo)\n\
- SAME EXACT GRAPHICS (any graphics/designs MUST appear identically)\n\
- SAME GARMENT TYPE (hoodie stays hoodie, dress stays dress, etc.)\n\
- SAME DESIGN ELEMENTS (pockets, zippers, stripes, ALL details preserved)\n\n\
ABSOLUTELY FORBIDDEN:\n\
- Changing to a different outfit\n\
- Changing colors (NO blue jacket if reference shows black hoodie!)\n\
- Removing or altering logos/graphics/text\n\
- Creating a \"similar\" or \"inspired by\" design\n\
- Adding or removing design elements\n\
- ANY modification to the garment whatsoever\n\n\
YOU ARE CREATING: A product photo for e-commerce - the model wears the EXACT item \
shown in reference\n\
YOU ARE NOT: Creating a fashion editorial with a different interpretation\n\n\
Think: \"I'm photographing this EXACT garment on a model for an online store - it must \
look IDENTICAL to the design shown\"",
    );

    PromptBundle::new(prompt)
        .with_negative(NEGATIVE)
        .with_strength(STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolates_model_type_and_pose() {
        let bundle = build("tall runway model", "walking");
        assert!(bundle.prompt.contains("a tall runway model in walking pose"));
        assert_eq!(bundle.image_strength, Some(0.92));
    }

    #[test]
    fn negative_prompt_forbids_design_drift() {
        let bundle = build(DEFAULT_MODEL_TYPE, DEFAULT_POSE);
        assert!(bundle.negative_prompt.unwrap().contains("different outfit"));
    }
}
