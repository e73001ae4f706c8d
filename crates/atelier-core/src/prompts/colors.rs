//! Color-stage prompts: initial colorization vs recolor of a colored design.

use super::PromptBundle;

/// Preservation strength when editing an already-colored design.
pub const REFINE_STRENGTH: f64 = 0.90;

const BASE_NEGATIVE: &str = "rainbow colors, multicolor, multiple colors, \
varied colors, colorful mix, color variety";

const INITIAL_NEGATIVE_SUFFIX: &str =
    ", rainbow, multicolor pattern, color variety, colorful mix";

const REFINE_NEGATIVE_SUFFIX: &str = ", different design, new garment, \
redesigned, altered silhouette, changed proportions, new style, alternative \
design, modified structure, different shape, different garment type, new \
dress, new jacket, new pants, new coat, new outfit, completely different";

/// Initial colorization of a sketch vs refinement of a previous colored
/// version. Decided by whether a previous colored URL was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Initial,
    Refine,
}

/// Build the color-stage prompt bundle.
///
/// `colors` is the exact palette the model may use; an empty list falls back
/// to "appropriate colors". `instruction` is the user's free-text request.
#[must_use]
pub fn build(mode: ColorMode, colors: &[String], instruction: Option<&str>) -> PromptBundle {
    let color_restriction = if colors.is_empty() {
        "appropriate colors".to_string()
    } else {
        format!("ONLY {}", colors.join(" and "))
    };
    let color_list = colors.join(", ");

    match mode {
        ColorMode::Refine => {
            let change = instruction.unwrap_or("change the colors");
            let prompt = format!(
                "THIS IS A COLOR/DETAIL EDIT REQUEST, NOT A NEW DESIGN REQUEST. \
You must COPY the reference garment image exactly and make ONLY this modification: \"{change}\".\n\n\
CRITICAL COLOR RESTRICTION:\n\
- Use ONLY these exact colors: {color_restriction}\n\
- DO NOT use any other colors (no yellow, purple, green, orange, pink, blue unless specified)\n\
- DO NOT create rainbow or multicolor patterns\n\
- DO NOT add color variety\n\
- ONLY use: {color_list}\n\n\
STRICT RULES FOR ALL GARMENT TYPES (dresses, jackets, pants, skirts, shirts, coats, etc.):\n\
- Keep 100% identical: ALL design elements, silhouette, proportions, seam lines, construction \
details (necklines, sleeves, hems, waistlines, closures, pockets, collars, patterns, \
embellishments, etc.)\n\
- Keep the exact same base garment design and structure\n\
- Keep the same pose, angle, and body proportions\n\
- Only modify colors/details as mentioned: \"{change}\"\n\
- Use ONLY colors: {color_restriction}\n\
- If user says \"remove X\", keep everything else 100% identical and only remove X\n\
- If user says \"change X color\", keep everything else 100% identical and only change X color\n\
- If user says \"add X detail\", keep everything else 100% identical and only add X detail\n\
- If user says \"make X [adjective]\", keep everything else 100% identical and only modify X\n\n\
The reference image is your EXACT TEMPLATE. Copy it precisely and make the SMALLEST possible \
change to satisfy the request.\n\n\
This is image-to-image refinement, not text-to-image generation. Professional fashion \
illustration style, no text or labels, clean background.",
            );
            PromptBundle::new(prompt)
                .with_negative(format!("{BASE_NEGATIVE}{REFINE_NEGATIVE_SUFFIX}"))
                .with_strength(REFINE_STRENGTH)
        }
        ColorMode::Initial => {
            let extra = instruction.unwrap_or("");
            let prompt = format!(
                "STRICT COLOR RULE: Use ONLY these exact colors: {color_restriction}. \
DO NOT use any other colors. DO NOT create rainbow or multicolor patterns.\n\n\
Add these specific colors to this professional fashion designer sketch: {color_list}. \
Maintain the exact same design and proportions, keep the hand-drawn sketch aesthetic, \
professional fashion illustration style, no text or labels, clean background, {extra}. \
Preserve the original sketch lines and structure while adding ONLY the specified colors \
({color_restriction}) to the garment.",
            );
            PromptBundle::new(prompt)
                .with_negative(format!("{BASE_NEGATIVE}{INITIAL_NEGATIVE_SUFFIX}"))
        }
    }
}
