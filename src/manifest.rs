//! Batch manifest: which assets to convert and where they live
//!
//! A manifest is a small TOML file naming the source directories, the output
//! directory and the list of asset names. The built-in default describes the
//! channel logo set of the mobile apps.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing manifests
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse manifest TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Assets to convert plus the directory layout around them
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Directory of the light (default) vector drawables
    pub source_dir: PathBuf,
    /// Directory of the optional dark-mode variants
    pub night_source_dir: PathBuf,
    /// Directory the SVG files are written to
    pub output_dir: PathBuf,
    /// Suffix appended to the file stem of dark-mode outputs
    pub dark_suffix: String,
    /// SVG files in the output directory starting with this prefix are
    /// removed before a run
    pub stale_prefix: String,
    /// Asset names, without the `.xml` extension
    pub assets: Vec<String>,
}

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlManifest {
    paths: TomlPaths,
    output: Option<TomlOutput>,
    assets: Vec<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPaths {
    source_dir: PathBuf,
    night_source_dir: PathBuf,
    output_dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    dark_suffix: Option<String>,
    stale_prefix: Option<String>,
}

const DEFAULT_DARK_SUFFIX: &str = "_dark";

/// Default manifest - the channel logos shipped with the apps
const DEFAULT_MANIFEST: &str = r#"
assets = [
    "channel_logo_das_erste",
    "channel_logo_zdf",
    "channel_logo_arte",
    "channel_logo_3sat",
    "channel_logo_kika",
    "channel_logo_phoenix",
    "channel_logo_tagesschau24",
    "channel_logo_ard_alpha",
    "channel_logo_zdf_info",
    "channel_logo_zdf_neo",
    "channel_logo_one",
    "channel_logo_br",
    "channel_logo_hr",
    "channel_logo_mdr",
    "channel_logo_ndr",
    "channel_logo_rbb",
    "channel_logo_rb",
    "channel_logo_sr",
    "channel_logo_swr",
    "channel_logo_wdr",
    "channel_logo_parlamentsfernsehen",
]

[paths]
source_dir = "android/app/src/main/res/drawable"
night_source_dir = "android/app/src/main/res/drawable-night"
output_dir = "Zapp/Resources/ChannelLogos"

[output]
dark_suffix = "_dark"
stale_prefix = "channel_logo_"
"#;

impl Manifest {
    /// Load manifest from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load manifest from TOML string
    ///
    /// The `[output]` table is optional; without it dark variants use the
    /// `_dark` suffix and no stale files are removed.
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;
        let output = parsed.output.unwrap_or(TomlOutput {
            dark_suffix: None,
            stale_prefix: None,
        });

        Ok(Manifest {
            source_dir: parsed.paths.source_dir,
            night_source_dir: parsed.paths.night_source_dir,
            output_dir: parsed.paths.output_dir,
            dark_suffix: output
                .dark_suffix
                .unwrap_or_else(|| DEFAULT_DARK_SUFFIX.to_string()),
            stale_prefix: output.stale_prefix.unwrap_or_default(),
            assets: parsed.assets,
        })
    }

    /// Path of the light source drawable for an asset
    pub fn source_path(&self, root: &Path, asset: &str) -> PathBuf {
        root.join(&self.source_dir).join(format!("{}.xml", asset))
    }

    /// Path of the dark-mode source drawable for an asset
    pub fn night_source_path(&self, root: &Path, asset: &str) -> PathBuf {
        root.join(&self.night_source_dir).join(format!("{}.xml", asset))
    }

    /// Path of the generated SVG, with an optional file-stem suffix
    pub fn output_path(&self, root: &Path, asset: &str, suffix: &str) -> PathBuf {
        root.join(&self.output_dir)
            .join(format!("{}{}.svg", asset, suffix))
    }

    /// Whether a file name in the output directory belongs to a previous run
    ///
    /// An empty stale prefix never matches, so no files are removed.
    pub fn is_stale_output(&self, file_name: &str) -> bool {
        !self.stale_prefix.is_empty()
            && file_name.starts_with(&self.stale_prefix)
            && file_name.ends_with(".svg")
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self::from_str(DEFAULT_MANIFEST).expect("Default manifest should be valid TOML")
    }
}
