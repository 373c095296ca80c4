//! Conversion of a vector-drawable element tree into drawable path records
//!
//! The walker flattens groups and clip-path pairings into an ordered list;
//! each path's fill, stroke and opacity are resolved inline while walking.

pub mod color;
pub mod resolve;
pub mod types;
pub mod walker;

pub use color::normalize_color;
pub use resolve::{gradient_fill, resolve_path};
pub use types::{ConversionResult, DrawablePath, NormalizedColor, Viewport};
pub use walker::walk;

use crate::error::ConvertError;
use crate::source::Element;

/// Convert a document root into its viewport and ordered drawable paths
///
/// The root itself is never drawn; only its descendants are walked.
pub fn convert(root: &Element) -> Result<ConversionResult, ConvertError> {
    let viewport = Viewport::from_root(root)?;
    let paths: Vec<DrawablePath> = root.children.iter().flat_map(walk).collect();

    log::debug!(
        "resolved {} path(s) in a {}x{} viewport",
        paths.len(),
        viewport.width,
        viewport.height
    );

    Ok(ConversionResult { viewport, paths })
}
