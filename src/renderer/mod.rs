//! SVG renderer for generating output from conversion results
//!
//! This module takes a ConversionResult and produces a standalone SVG string
//! with one `<path>` per drawable path.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, SvgBuilder};
