//! Static table of art styles offered by the generator page.
//!
//! Each key maps to a fragment appended to the composed prompt. Lookup is
//! total: unknown keys resolve to the default style.

pub const DEFAULT_STYLE: &str = "cartoon";

const STYLES: &[(&str, &str)] = &[
    ("cartoon", "vibrant cartoon style, bold outlines, flat saturated colors, playful"),
    ("realistic", "photorealistic render, studio lighting, shallow depth of field"),
    ("pixel", "retro pixel art, 16-bit palette, crisp dithering"),
    ("anime", "anime illustration, cel shading, expressive eyes, dynamic pose"),
    ("3d", "3d rendered character, soft global illumination, glossy materials"),
    ("minimal", "minimalist flat vector logo, simple geometry, two tone palette"),
];

/// Resolve a style key to its prompt fragment. Unknown or empty keys fall
/// back to [`DEFAULT_STYLE`].
pub fn style_fragment(key: &str) -> &'static str {
    STYLES
        .iter()
        .find(|(k, _)| *k == key)
        .or_else(|| STYLES.iter().find(|(k, _)| *k == DEFAULT_STYLE))
        .map(|(_, fragment)| *fragment)
        .unwrap_or("")
}

/// Style keys in presentation order.
pub fn known_styles() -> Vec<&'static str> {
    STYLES.iter().map(|(k, _)| *k).collect()
}
