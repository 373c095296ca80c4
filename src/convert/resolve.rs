//! Resolution of a path element's visual attributes

use crate::source::{Element, AAPT_NS, ANDROID_NS};

use super::color::normalize_color;
use super::types::{DrawablePath, NormalizedColor};

/// Name an `aapt:attr` node declares when it defines the fill color inline
const FILL_COLOR_ATTR: &str = "android:fillColor";

/// Build a drawable path from a path element
///
/// `geometry_override` replaces the element's own `android:pathData` when it
/// is non-empty. Returns `None` when no geometry is available; this is the
/// normal outcome for decorative or empty path nodes.
pub fn resolve_path(element: &Element, geometry_override: Option<&str>) -> Option<DrawablePath> {
    let geometry = non_empty(geometry_override)
        .or_else(|| non_empty(element.android_attribute("pathData")))?;

    let mut fill = element.android_attribute("fillColor").map(str::to_string);
    let mut fill_alpha = element.android_attribute("fillAlpha").map(str::to_string);
    let stroke = element.android_attribute("strokeColor");
    let stroke_alpha = element.android_attribute("strokeAlpha");

    if let Some(gradient) = gradient_fill(element) {
        if let Some(color) = gradient.color {
            fill = Some(color);
            if gradient.opacity.is_some() {
                fill_alpha = gradient.opacity;
            }
        }
    }

    let fill = normalize_color(fill.as_deref());
    let stroke = normalize_color(stroke);

    Some(DrawablePath {
        geometry: geometry.to_string(),
        fill: fill.color,
        fill_opacity: non_empty(fill_alpha.as_deref())
            .map(str::to_string)
            .or(fill.opacity),
        stroke: stroke.color,
        stroke_opacity: non_empty(stroke_alpha).map(str::to_string).or(stroke.opacity),
        stroke_width: non_empty(element.android_attribute("strokeWidth")).map(str::to_string),
        fill_rule: non_empty(element.android_attribute("fillType")).map(str::to_string),
    })
}

/// Representative solid color of an inline gradient fill
///
/// Scans the element's direct `aapt:attr` children for one declaring the fill
/// color with a nested `gradient`. The gradient's `startColor` wins over its
/// first `item` stop. An attribute definition yielding no color does not end
/// the scan.
pub fn gradient_fill(element: &Element) -> Option<NormalizedColor> {
    element
        .children_named(Some(AAPT_NS), "attr")
        .filter(|attr| declared_name(attr) == Some(FILL_COLOR_ATTR))
        .find_map(|attr| {
            let gradient = attr.children_named(None, "gradient").next()?;
            let color = non_empty(gradient.android_attribute("startColor")).or_else(|| {
                let item = gradient.children_named(None, "item").next()?;
                non_empty(item.android_attribute("color"))
            })?;
            Some(normalize_color(Some(color)))
        })
}

fn declared_name(attr: &Element) -> Option<&str> {
    non_empty(attr.attribute(Some(ANDROID_NS), "name")).or_else(|| attr.attribute(None, "name"))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
