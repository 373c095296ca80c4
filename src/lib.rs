//! vd2svg - convert vector-drawable XML icons into standalone SVG documents
//!
//! This library provides a reader for vector-drawable XML, the conversion of
//! its group/clip-path/path tree into flat drawable paths, and an SVG
//! serializer. A batch driver converts a manifest of assets in one go.
//!
//! # Example
//!
//! ```rust
//! use vd2svg::vector_to_svg;
//!
//! let svg = vector_to_svg(r##"
//!     <vector xmlns:android="http://schemas.android.com/apk/res/android"
//!         android:viewportWidth="24" android:viewportHeight="24">
//!         <path android:pathData="M0 0 L24 24" android:fillColor="#FF0000"/>
//!     </vector>
//! "##).unwrap();
//! assert!(svg.contains(r##"<path d="M0 0 L24 24" fill="#FF0000" />"##));
//! ```

pub mod batch;
pub mod convert;
pub mod error;
pub mod manifest;
pub mod renderer;
pub mod source;

pub use convert::{ConversionResult, DrawablePath, Viewport};
pub use error::ConvertError;
pub use manifest::Manifest;
pub use renderer::{render_svg, SvgConfig};
pub use source::{parse, Element};

/// Configuration for the complete conversion pipeline
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl ConvertConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Convert vector-drawable XML text to SVG with default configuration
///
/// This is the main entry point for the library. It parses the source,
/// resolves the drawable paths, and generates SVG output.
pub fn vector_to_svg(source: &str) -> Result<String, ConvertError> {
    vector_to_svg_with_config(source, &ConvertConfig::default())
}

/// Convert vector-drawable XML text to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use vd2svg::{vector_to_svg_with_config, ConvertConfig, SvgConfig};
///
/// let config = ConvertConfig::new().with_svg(SvgConfig::new().with_standalone(false));
/// let svg = vector_to_svg_with_config(
///     r#"<vector xmlns:android="http://schemas.android.com/apk/res/android"
///         android:viewportWidth="10" android:viewportHeight="10"/>"#,
///     &config,
/// ).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn vector_to_svg_with_config(source: &str, config: &ConvertConfig) -> Result<String, ConvertError> {
    let root = parse(source)?;
    document_to_svg(&root, config)
}

/// Convert an already loaded element tree to SVG
///
/// Fails only when the root lacks a usable viewport; nothing is rendered in
/// that case.
pub fn document_to_svg(root: &Element, config: &ConvertConfig) -> Result<String, ConvertError> {
    let result = convert::convert(root)?;
    Ok(render_svg(&result, &config.svg))
}
