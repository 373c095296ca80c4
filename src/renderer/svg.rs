//! SVG generation from conversion results

use crate::convert::{ConversionResult, DrawablePath, Viewport};

use super::SvgConfig;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a path element
    ///
    /// Attribute order is fixed: `d`, `fill`, `fill-opacity`, `stroke`,
    /// `stroke-opacity`, `stroke-width`, `fill-rule`. A missing fill is written
    /// as `none` so the path is never filled with the SVG default black.
    pub fn add_path(&mut self, path: &DrawablePath) {
        let mut attrs = vec![
            attr("d", &path.geometry),
            attr("fill", path.fill.as_deref().unwrap_or("none")),
        ];

        let optional = [
            ("fill-opacity", &path.fill_opacity),
            ("stroke", &path.stroke),
            ("stroke-opacity", &path.stroke_opacity),
            ("stroke-width", &path.stroke_width),
            ("fill-rule", &path.fill_rule),
        ];
        for (name, value) in optional {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                attrs.push(attr(name, value));
            }
        }

        self.elements
            .push(format!("{}<path {} />", self.indent_str(), attrs.join(" ")));
    }

    /// Build the final SVG string
    pub fn build(self, viewport: Viewport) -> String {
        let newline = self.newline();
        let mut lines = Vec::with_capacity(self.elements.len() + 3);

        if self.config.standalone {
            lines.push(r#"<?xml version="1.0" encoding="utf-8"?>"#.to_string());
        }

        let xmlns = if self.config.include_namespace {
            format!(r#" xmlns="{}""#, SVG_NS)
        } else {
            String::new()
        };
        let width = format_number(viewport.width);
        let height = format_number(viewport.height);
        lines.push(format!(
            r#"<svg{} width="{}" height="{}" viewBox="0 0 {} {}">"#,
            xmlns, width, height, width, height
        ));

        lines.extend(self.elements.iter().cloned());
        lines.push("</svg>".to_string());

        lines.join(newline)
    }
}

/// Render a conversion result to an SVG string
pub fn render_svg(result: &ConversionResult, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for path in &result.paths {
        builder.add_path(path);
    }
    builder.build(result.viewport)
}

fn attr(name: &str, value: &str) -> String {
    format!(r#"{}="{}""#, name, escape_xml(value))
}

/// Format a number as its shortest round-trip decimal, always with a
/// fractional part (`24` is written `24.0`)
pub fn format_number(value: f64) -> String {
    format!("{:?}", value)
}

/// Escape special characters for XML attribute values
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn single(path: DrawablePath) -> ConversionResult {
        ConversionResult {
            viewport: Viewport::new(24.0, 24.0),
            paths: vec![path],
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(24.0), "24.0");
        assert_eq!(format_number(23.5), "23.5");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(1280.0), "1280.0");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
        assert_eq!(escape_xml("M0 0 L24 24"), "M0 0 L24 24");
    }

    #[test]
    fn test_render_empty() {
        let result = ConversionResult {
            viewport: Viewport::new(24.0, 12.0),
            paths: vec![],
        };
        let svg = render_svg(&result, &SvgConfig::default());
        assert_eq!(
            svg,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24.0\" height=\"12.0\" viewBox=\"0 0 24.0 12.0\">\n\
             </svg>"
        );
    }

    #[test]
    fn test_missing_fill_renders_none() {
        let svg = render_svg(&single(DrawablePath::new("M0 0")), &SvgConfig::default());
        assert!(svg.contains(r#"<path d="M0 0" fill="none" />"#));
    }

    #[test]
    fn test_attribute_order() {
        let path = DrawablePath::new("M0 0")
            .with_fill_rule("evenOdd")
            .with_stroke_width("2")
            .with_stroke_opacity("0.5")
            .with_stroke("#000000")
            .with_fill_opacity("0.314")
            .with_fill("#FF0000");
        let svg = render_svg(&single(path), &SvgConfig::default());
        assert!(svg.contains(
            r##"  <path d="M0 0" fill="#FF0000" fill-opacity="0.314" stroke="#000000" stroke-opacity="0.5" stroke-width="2" fill-rule="evenOdd" />"##
        ));
    }

    #[test]
    fn test_optional_attributes_omitted() {
        let svg = render_svg(
            &single(DrawablePath::new("M0 0").with_fill("red")),
            &SvgConfig::default(),
        );
        assert!(svg.contains(r#"<path d="M0 0" fill="red" />"#));
        assert!(!svg.contains("stroke"));
        assert!(!svg.contains("opacity"));
        assert!(!svg.contains("fill-rule"));
    }

    #[test]
    fn test_compact_output() {
        let config = SvgConfig::new()
            .with_pretty_print(false)
            .with_standalone(false)
            .with_namespace(false);
        let svg = render_svg(&single(DrawablePath::new("M0 0")), &config);
        assert_eq!(
            svg,
            r#"<svg width="24.0" height="24.0" viewBox="0 0 24.0 24.0"><path d="M0 0" fill="none" /></svg>"#
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let result = ConversionResult {
            viewport: Viewport::new(10.0, 20.0),
            paths: vec![
                DrawablePath::new("M0 0").with_fill("#010203"),
                DrawablePath::new("M1 1").with_stroke("#040506"),
            ],
        };
        let config = SvgConfig::default();
        assert_eq!(render_svg(&result, &config), render_svg(&result, &config));
    }
}
