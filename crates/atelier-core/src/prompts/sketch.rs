//! Sketch-stage prompts: fresh technical sketch vs micro-edit refinement.

use super::PromptBundle;
use crate::features::GarmentFeatures;

/// Preservation strength applied when refining an existing sketch. 0.98
/// means 98% of the reference image must survive the edit.
pub const REFINE_STRENGTH: f64 = 0.98;

const FRESH_NEGATIVE: &str = "photograph, photo, 3D render, photorealistic, \
finished product, product mockup, model wearing clothes, realistic fabric, \
actual garment, finished clothing, styled photoshoot";

const LOGO_NEGATIVE: &str = ", text on clothing, written words, drawn letters, \
handwritten text, typography, text labels, brand name as text, recreated logo, \
redrawn logo, logo variations";

const REFINE_NEGATIVE: &str = "completely new design, different garment, \
redesigned, reimagined, alternative version, new interpretation, different \
style, changed silhouette, modified structure, new outfit, different design, \
recreated design, similar design, inspired by, large logo, oversized logo, \
huge branding, massive graphics, enlarged text, bigger logo, logo enlargement";

/// The two variants of the sketch endpoint. Which one applies is decided by
/// whether a base image (previous sketch or uploaded photo) is present, not
/// by an explicit mode flag from the client.
#[derive(Debug)]
pub enum SketchMode<'a> {
    /// No base image: generate a new technical sketch from scratch.
    Fresh {
        prompt: &'a str,
        garment_type: Option<&'a str>,
        gender: Option<&'a str>,
        features: &'a GarmentFeatures,
        /// A user-provided logo image is attached alongside the prompt.
        has_logo: bool,
    },
    /// Base image present: copy it and apply one small change.
    Refine {
        /// The one change to apply (explicit edit instruction, falling back
        /// to the free prompt text).
        change: &'a str,
        /// The original design prompt, passed along as textual context only.
        context: &'a str,
        /// Prior accepted edits, newest last. Rendered into the prompt so
        /// the model does not redo them.
        history: &'a [String],
    },
}

/// Build the sketch-stage prompt bundle for the given mode.
#[must_use]
pub fn build(mode: &SketchMode<'_>) -> PromptBundle {
    match mode {
        SketchMode::Fresh {
            prompt,
            garment_type,
            gender,
            features,
            has_logo,
        } => build_fresh(prompt, *garment_type, *gender, features, *has_logo),
        SketchMode::Refine {
            change,
            context,
            history,
        } => build_refine(change, context, history),
    }
}

fn build_fresh(
    prompt: &str,
    garment_type: Option<&str>,
    gender: Option<&str>,
    features: &GarmentFeatures,
    has_logo: bool,
) -> PromptBundle {
    let gender_context = gender
        .map(|g| format!("designed for {}", g.to_lowercase()))
        .unwrap_or_default();
    let feature_description = features.describe();

    let logo_instruction = if has_logo {
        "\n\nCRITICAL LOGO INSTRUCTION - READ CAREFULLY:\n\
- The reference image contains the actual brand logo/graphic provided by the user\n\
- You MUST use this EXACT logo image - copy it precisely as shown (colors, shape, design)\n\
- DO NOT create your own version, DO NOT draw text, DO NOT recreate the logo\n\
- DO NOT write brand names as text (no \"Gucci\", \"Nike\", \"Supreme\", etc. as text)\n\
- ONLY use the provided logo image exactly as it appears\n\
- Place it creatively and prominently on the garment: oversized back print, bold chest branding, \
sleeve graphics, shoulder placement, or asymmetric positioning\n\
- Make it look professionally printed, embroidered, or heat-pressed onto the fabric\n\
- Think Supreme, Off-White, Balenciaga style logo placement - bold, confident, fashion-forward\n\
- Integrate it into the fabric design as if it was manufactured that way"
    } else {
        ""
    };

    let full_prompt = format!(
        "FASHION DESIGN SKETCH ONLY - NOT A FINISHED PRODUCT!\n\n\
Create a hand-drawn fashion design sketch in professional technical illustration style:\n\
- Black and white pencil sketch on white paper\n\
- Clean line drawing with construction lines visible\n\
- Technical fashion croquis style (like what designers draw before making the garment)\n\
- Flat technical drawing showing garment details\n\
- {garment} {gender_context} {feature_description}, {prompt}{logo_instruction}\n\n\
CRITICAL: This must be a SKETCH/DRAWING, not a photograph or 3D render or finished product mockup!\n\
Style: Hand-drawn fashion illustration, pencil on paper, designer's original sketch, \
technical flat, black line art on white background\n\n\
DO NOT create: photographs, 3D renders, product mockups, photorealistic images, \
finished garments on models",
        garment = garment_type.unwrap_or("dress"),
    );

    let mut negative = FRESH_NEGATIVE.to_string();
    if has_logo {
        negative.push_str(LOGO_NEGATIVE);
    }

    PromptBundle::new(full_prompt).with_negative(negative)
}

fn build_refine(change: &str, context: &str, history: &[String]) -> PromptBundle {
    let conversation_context = if history.is_empty() {
        String::new()
    } else {
        let mut block = String::from(
            "\nCONVERSATION HISTORY (for context only - DO NOT recreate these, \
the image already has them):\n",
        );
        for (index, entry) in history.iter().enumerate() {
            block.push_str(&format!("{}. {entry}\n", index + 1));
        }
        block.push_str("\nAll of the above are ALREADY in the image. Do NOT redo them.\n");
        block
    };

    let full_prompt = format!(
        "ABSOLUTE CRITICAL RULE: THIS IS A MICRO-EDIT, NOT A REDESIGN\n\n\
YOU ARE EDITING AN EXISTING IMAGE. YOUR JOB IS TO COPY IT 99.9% AND CHANGE ONLY 0.1%.\n\n\
REFERENCE IMAGE: This shows the CURRENT design state\n\
YOUR ONLY TASK: \"{change}\"\n\
{conversation_context}\
IRONCLAD EDITING RULES - ZERO EXCEPTIONS:\n\n\
1. COPY THE REFERENCE IMAGE EXACTLY:\n\
   - Same jacket style, silhouette, shape\n\
   - Same collar design and position\n\
   - Same zipper placement and style\n\
   - Same pocket positions and shapes\n\
   - Same sleeve style and cuffs\n\
   - Same hem and waistband\n\
   - Same construction lines and seams\n\
   - Same proportions and fit\n\n\
2. PRESERVE ALL EXISTING LOGOS/GRAPHICS:\n\
   - Keep logos in the SAME positions\n\
   - Keep logos at the SAME size (unless specifically asked to change size)\n\
   - Keep logo styles identical\n\
   - If changing logo size: make it 50% smaller or bigger, not 500% different\n\n\
3. YOUR EDIT: \"{change}\"\n\
   - This is the ONLY thing you can change\n\
   - Change NOTHING else\n\
   - Be LITERAL - if it says \"make logo smaller\", make it 30-50% smaller, not change its position\n\
   - If it says \"keep same\", DO NOT TOUCH IT AT ALL\n\n\
4. WHAT \"KEEP THE SAME\" MEANS:\n\
   - 100% identical - no variation whatsoever\n\
   - Same position, same size, same angle, same everything\n\
   - Not \"similar\" - IDENTICAL\n\n\
ABSOLUTELY FORBIDDEN - WILL RESULT IN FAILURE:\n\
- Making the logo bigger when asked to make it smaller\n\
- Moving logos to different positions when not asked\n\
- Changing the jacket design or structure\n\
- Adding new design elements\n\
- Removing existing elements not mentioned\n\
- \"Improving\" or \"enhancing\" anything\n\
- Creating a new interpretation\n\
- Making it \"look better\"\n\n\
CORRECT APPROACH:\n\
1. Take the reference image\n\
2. Copy it pixel-by-pixel (99.9% exact duplicate)\n\
3. Make ONLY this microscopic change: \"{change}\"\n\
4. Output the result\n\n\
EXAMPLES OF CORRECT MICRO-EDITS:\n\
Example 1: \"Make logo smaller\"\n\
  CORRECT: Keep jacket identical, reduce logo size by 40%, same position\n\
  WRONG: Redesign jacket, change logo position, make it bigger instead\n\n\
Example 2: \"Add text on chest\"\n\
  CORRECT: Copy entire design, add small text only on chest, everything else identical\n\
  WRONG: Redesign the whole garment, change existing logos, move elements around\n\n\
Example 3: \"Change sleeve pattern\"\n\
  CORRECT: Duplicate everything, only modify sleeve pattern, keep logo/design/structure\n\
  WRONG: New jacket design, different fit, moved logos, changed proportions\n\n\
Think: \"I'm using Photoshop's micro-edit tool, not the redesign button. \
CMD+C, CMD+V the image, then make ONE tiny change.\"\n\n\
CRITICAL: With image_strength=0.98, you MUST preserve 98% of the reference image exactly. \
Only 2% can change.\n\n\
CONTEXT (ignore this, use the VISUAL reference): {context}",
    );

    PromptBundle::new(full_prompt)
        .with_negative(REFINE_NEGATIVE)
        .with_strength(REFINE_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh<'a>(prompt: &'a str, features: &'a GarmentFeatures) -> SketchMode<'a> {
        SketchMode::Fresh {
            prompt,
            garment_type: Some("bomber jacket"),
            gender: Some("Women"),
            features,
            has_logo: false,
        }
    }

    #[test]
    fn fresh_mode_interpolates_garment_and_gender() {
        let features = GarmentFeatures {
            fabric: Some("leather".into()),
            ..Default::default()
        };
        let bundle = build(&fresh("racing stripes", &features));
        assert!(bundle.prompt.contains("bomber jacket designed for women"));
        assert!(bundle.prompt.contains("with leather fabric, racing stripes"));
        assert!(bundle.image_strength.is_none());
    }

    #[test]
    fn fresh_mode_defaults_garment_to_dress() {
        let features = GarmentFeatures::default();
        let bundle = build(&SketchMode::Fresh {
            prompt: "flowing",
            garment_type: None,
            gender: None,
            features: &features,
            has_logo: false,
        });
        assert!(bundle.prompt.contains("- dress "));
    }

    #[test]
    fn fresh_mode_with_logo_extends_both_prompts() {
        let features = GarmentFeatures::default();
        let bundle = build(&SketchMode::Fresh {
            prompt: "streetwear hoodie",
            garment_type: Some("hoodie"),
            gender: None,
            features: &features,
            has_logo: true,
        });
        assert!(bundle.prompt.contains("CRITICAL LOGO INSTRUCTION"));
        let negative = bundle.negative_prompt.unwrap();
        assert!(negative.starts_with("photograph"));
        assert!(negative.contains("recreated logo"));
    }

    #[test]
    fn refine_mode_uses_micro_edit_template_and_strength() {
        let bundle = build(&SketchMode::Refine {
            change: "make the logo smaller",
            context: "black hoodie",
            history: &[],
        });
        assert!(bundle.prompt.contains("YOUR ONLY TASK: \"make the logo smaller\""));
        assert!(bundle.prompt.ends_with("black hoodie"));
        assert_eq!(bundle.image_strength, Some(0.98));
        assert!(bundle.negative_prompt.unwrap().contains("logo enlargement"));
    }

    #[test]
    fn refine_mode_renders_numbered_history() {
        let history = vec!["added chest logo".to_string(), "shortened sleeves".to_string()];
        let bundle = build(&SketchMode::Refine {
            change: "add a hood",
            context: "jacket",
            history: &history,
        });
        assert!(bundle.prompt.contains("1. added chest logo"));
        assert!(bundle.prompt.contains("2. shortened sleeves"));
        assert!(bundle.prompt.contains("ALREADY in the image"));
    }
}
