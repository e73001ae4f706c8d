//! Categorical garment attributes supplied by the design wizard.
//!
//! Every field is optional; the front end only sends what the user picked.
//! Sentinel values ("None", "No pockets", "Plain") mean the attribute was
//! explicitly deselected and must not appear in the prompt.

use serde::Deserialize;

/// Detailed garment attributes, deserialized straight from the request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GarmentFeatures {
    pub fabric: Option<String>,
    pub pattern: Option<String>,
    pub shoulders: Option<String>,
    pub sleeves: Option<String>,
    pub neckline: Option<String>,
    pub collar: Option<String>,
    pub waist: Option<String>,
    pub length: Option<String>,
    pub fit: Option<String>,
    pub embellishments: Option<String>,
    pub closure: Option<String>,
    pub pockets: Option<String>,
    pub back_detail: Option<String>,
    pub hem_style: Option<String>,
}

impl GarmentFeatures {
    /// Full feature description used by the sketch stage, e.g.
    /// `"with silk fabric, floral pattern, puffed sleeves"`. Empty string
    /// when nothing is set.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        push_suffixed(&mut parts, &self.fabric, "fabric");
        push_suffixed(&mut parts, &self.pattern, "pattern");
        push_suffixed(&mut parts, &self.shoulders, "shoulders");
        push_suffixed(&mut parts, &self.sleeves, "sleeves");
        push_suffixed(&mut parts, &self.neckline, "neckline");
        push_suffixed(&mut parts, &self.collar, "collar");
        push_suffixed(&mut parts, &self.waist, "waist");
        push_suffixed(&mut parts, &self.length, "length");
        push_suffixed(&mut parts, &self.fit, "fit");
        if let Some(v) = set_and_not(&self.embellishments, "None") {
            parts.push(format!("with {v}"));
        }
        push_suffixed(&mut parts, &self.closure, "closure");
        if let Some(v) = set_and_not(&self.pockets, "No pockets") {
            parts.push(v.to_string());
        }
        if let Some(v) = set_and_not(&self.back_detail, "Plain") {
            parts.push(format!("{v} back"));
        }
        push_suffixed(&mut parts, &self.hem_style, "hem");
        join_with_prefix(&parts)
    }

    /// Reduced description used when regenerating camera angles; the angle
    /// prompts only need silhouette-level attributes.
    #[must_use]
    pub fn describe_for_angles(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        push_suffixed(&mut parts, &self.fabric, "fabric");
        push_suffixed(&mut parts, &self.pattern, "pattern");
        push_suffixed(&mut parts, &self.shoulders, "shoulders");
        push_suffixed(&mut parts, &self.sleeves, "sleeves");
        push_suffixed(&mut parts, &self.neckline, "neckline");
        push_suffixed(&mut parts, &self.waist, "waist");
        push_suffixed(&mut parts, &self.length, "length");
        push_suffixed(&mut parts, &self.fit, "fit");
        join_with_prefix(&parts)
    }
}

fn push_suffixed(parts: &mut Vec<String>, value: &Option<String>, suffix: &str) {
    if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
        parts.push(format!("{v} {suffix}"));
    }
}

fn set_and_not<'a>(value: &'a Option<String>, sentinel: &str) -> Option<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != sentinel)
}

fn join_with_prefix(parts: &[String]) -> String {
    if parts.is_empty() {
        String::new()
    } else {
        format!("with {}", parts.join(", "))
    }
}
