//! Color normalization for fill and stroke values
//!
//! Vector drawables carry alpha inside the color (`#AARRGGBB`), while SVG
//! expects it in a separate opacity attribute.

use super::types::NormalizedColor;

/// Split a raw color attribute into an SVG color and an optional opacity
///
/// - absent or blank input yields neither
/// - anything not starting with `#` passes through as a named color
/// - `#RRGGBB` passes through unchanged
/// - `#AARRGGBB` becomes `#RRGGBB` plus the alpha as a fraction with three decimals
/// - any other hex length passes through unchanged
pub fn normalize_color(raw: Option<&str>) -> NormalizedColor {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return NormalizedColor::default(),
    };

    let Some(hex) = raw.strip_prefix('#') else {
        return NormalizedColor::new(Some(raw.to_string()), None);
    };

    if hex.len() == 8 && hex.is_char_boundary(2) {
        let (alpha, rgb) = hex.split_at(2);
        if let Ok(alpha) = u8::from_str_radix(alpha, 16) {
            return NormalizedColor::new(Some(format!("#{}", rgb)), Some(format_alpha(alpha)));
        }
    }

    NormalizedColor::new(Some(raw.to_string()), None)
}

/// Format an alpha byte as a fraction of 255 with exactly three decimals
pub fn format_alpha(alpha: u8) -> String {
    format!("{:.3}", f64::from(alpha) / 255.0)
}
