//! Records produced by the conversion

use crate::error::ConvertError;
use crate::source::Element;

/// Canvas size read from the root element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Read `android:viewportWidth` and `android:viewportHeight` from the root
    pub fn from_root(root: &Element) -> Result<Self, ConvertError> {
        Ok(Self {
            width: read_dimension(root, "viewportWidth")?,
            height: read_dimension(root, "viewportHeight")?,
        })
    }
}

fn read_dimension(root: &Element, attribute: &'static str) -> Result<f64, ConvertError> {
    let raw = root
        .android_attribute(attribute)
        .ok_or_else(|| ConvertError::MissingViewport {
            attribute,
            span: root.span.clone(),
        })?;

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(ConvertError::InvalidViewport {
            attribute,
            value: raw.to_string(),
            span: root.span.clone(),
        }),
    }
}

/// A color split into its RGB part and an optional opacity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedColor {
    pub color: Option<String>,
    pub opacity: Option<String>,
}

impl NormalizedColor {
    pub fn new(color: Option<String>, opacity: Option<String>) -> Self {
        Self { color, opacity }
    }
}

/// One renderable path with its resolved visual attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawablePath {
    /// Path data, passed through verbatim
    pub geometry: String,
    /// `None` renders as an explicit `fill="none"`
    pub fill: Option<String>,
    pub fill_opacity: Option<String>,
    pub stroke: Option<String>,
    pub stroke_opacity: Option<String>,
    pub stroke_width: Option<String>,
    pub fill_rule: Option<String>,
}

impl DrawablePath {
    /// A path with only geometry: no fill, no stroke
    pub fn new(geometry: impl Into<String>) -> Self {
        Self {
            geometry: geometry.into(),
            fill: None,
            fill_opacity: None,
            stroke: None,
            stroke_opacity: None,
            stroke_width: None,
            fill_rule: None,
        }
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_fill_opacity(mut self, opacity: impl Into<String>) -> Self {
        self.fill_opacity = Some(opacity.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_stroke_opacity(mut self, opacity: impl Into<String>) -> Self {
        self.stroke_opacity = Some(opacity.into());
        self
    }

    pub fn with_stroke_width(mut self, width: impl Into<String>) -> Self {
        self.stroke_width = Some(width.into());
        self
    }

    pub fn with_fill_rule(mut self, rule: impl Into<String>) -> Self {
        self.fill_rule = Some(rule.into());
        self
    }
}

/// Viewport plus the ordered paths of one source document
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub viewport: Viewport,
    pub paths: Vec<DrawablePath>,
}
