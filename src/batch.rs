//! Batch conversion of a manifest's assets into an output directory

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::error::ConvertError;
use crate::manifest::Manifest;
use crate::{vector_to_svg_with_config, ConvertConfig};

/// Errors that abort a batch run
#[derive(Debug, Error)]
pub enum BatchError {
    /// A required light source drawable does not exist
    #[error("source drawable '{}' not found", .0.display())]
    MissingSource(PathBuf),

    /// Reading, writing or listing a file failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A source drawable could not be converted
    #[error("failed to convert '{}': {source}", .path.display())]
    Convert {
        path: PathBuf,
        /// Source text, kept for diagnostics
        text: String,
        #[source]
        source: ConvertError,
    },
}

impl BatchError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Format the error, with source context for conversion failures
    pub fn format(&self) -> String {
        match self {
            Self::Convert { path, text, source } => {
                source.format(text, &path.display().to_string())
            }
            other => other.to_string(),
        }
    }
}

/// What a batch run did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BatchReport {
    /// SVG files written, in conversion order
    pub written: Vec<PathBuf>,
    /// Stale SVG files removed before converting
    pub removed: Vec<PathBuf>,
    /// Optional dark-mode sources that did not exist
    pub skipped: Vec<PathBuf>,
}

/// Convert one source drawable file into an SVG file
///
/// The destination is only written after the conversion succeeded.
pub fn convert_file(
    source: &Path,
    destination: &Path,
    config: &ConvertConfig,
) -> Result<(), BatchError> {
    let text = fs::read_to_string(source).map_err(|e| BatchError::io(source, e))?;
    let svg = match vector_to_svg_with_config(&text, config) {
        Ok(svg) => svg,
        Err(source_err) => {
            return Err(BatchError::Convert {
                path: source.to_path_buf(),
                text,
                source: source_err,
            })
        }
    };
    fs::write(destination, svg).map_err(|e| BatchError::io(destination, e))?;
    log::debug!("{} -> {}", source.display(), destination.display());
    Ok(())
}

/// Convert every asset of the manifest, relative to `root`
///
/// Creates the output directory, removes stale outputs from previous runs,
/// then converts each asset's light drawable (required) and dark drawable
/// (optional, written with the manifest's dark suffix).
pub fn run(manifest: &Manifest, root: &Path, config: &ConvertConfig) -> Result<BatchReport, BatchError> {
    let output_dir = root.join(&manifest.output_dir);
    fs::create_dir_all(&output_dir).map_err(|e| BatchError::io(&output_dir, e))?;

    let mut report = BatchReport {
        removed: remove_stale(manifest, &output_dir)?,
        ..BatchReport::default()
    };

    for asset in &manifest.assets {
        let light = manifest.source_path(root, asset);
        if !light.exists() {
            return Err(BatchError::MissingSource(light));
        }
        let destination = manifest.output_path(root, asset, "");
        convert_file(&light, &destination, config)?;
        report.written.push(destination);

        let dark = manifest.night_source_path(root, asset);
        if dark.exists() {
            let destination = manifest.output_path(root, asset, &manifest.dark_suffix);
            convert_file(&dark, &destination, config)?;
            report.written.push(destination);
        } else {
            report.skipped.push(dark);
        }
    }

    log::info!(
        "wrote {} SVG file(s) to {} ({} stale removed)",
        report.written.len(),
        output_dir.display(),
        report.removed.len()
    );

    Ok(report)
}

fn remove_stale(manifest: &Manifest, output_dir: &Path) -> Result<Vec<PathBuf>, BatchError> {
    let entries = fs::read_dir(output_dir).map_err(|e| BatchError::io(output_dir, e))?;

    let mut stale = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BatchError::io(output_dir, e))?;
        let is_stale = entry
            .file_name()
            .to_str()
            .map_or(false, |name| manifest.is_stale_output(name));
        if is_stale && entry.path().is_file() {
            stale.push(entry.path());
        }
    }
    stale.sort();

    for path in &stale {
        fs::remove_file(path).map_err(|e| BatchError::io(path, e))?;
        log::debug!("removed stale {}", path.display());
    }

    Ok(stale)
}
