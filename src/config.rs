//! Manifest configuration loading and parsing for `exseek-dist.toml` files.
//!
//! The defaults describe the exSEEK pipeline package; an override file is
//! only needed when packaging a modified tree.
use serde::Deserialize;

use crate::{error::Result, file_loader::FileLoader};

/// Default configuration filename, relative to the package root.
pub const DEFAULT_CONFIG_FILE: &str = "exseek-dist.toml";

pub const DEFAULT_PACKAGE_NAME: &str = "exseek-pipeline";
pub const DEFAULT_PACKAGE_VERSION: &str = "1.0.0";
pub const DEFAULT_PACKAGE_URL: &str = "https://github.com/lulab/exseek";
pub const DEFAULT_PACKAGE_DESCRIPTION: &str =
    "exSEEK - a pipeline for analysis of exRNA sequencing data";
pub const DEFAULT_REQUIREMENTS_FILE: &str = "requirements.txt";

/// A data-file mapping from an install destination to source files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct DataFilesConfig {
    /// Install destination the sources are copied into.
    pub destination: String,
    /// Source file paths relative to the package root.
    pub sources: Vec<String>,
}

impl Default for DataFilesConfig {
    fn default() -> Self {
        // install destination is literally "requirements.txt", not a
        // reference to the requirements file
        Self {
            destination: DEFAULT_REQUIREMENTS_FILE.to_string(),
            sources: vec!["LICENSE".to_string()],
        }
    }
}

/// Root configuration structure for `exseek-dist.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Distributable package name.
    pub name: String,
    /// Package version (semver).
    pub version: String,
    /// One-line package description.
    pub description: String,
    /// Project homepage URL.
    pub url: String,
    /// Executable entry scripts installed onto the system path.
    pub scripts: Vec<String>,
    /// Importable module names shipped with the package.
    pub packages: Vec<String>,
    /// Requirements file the runtime dependency list is read from.
    pub requirements_file: String,
    /// Auxiliary data files to install.
    pub data_files: Vec<DataFilesConfig>,
    /// Include non-code package data in the artifact.
    pub include_package_data: bool,
    /// Whether the package is safe to install as a zip archive.
    pub zip_safe: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PACKAGE_NAME.to_string(),
            version: DEFAULT_PACKAGE_VERSION.to_string(),
            description: DEFAULT_PACKAGE_DESCRIPTION.to_string(),
            url: DEFAULT_PACKAGE_URL.to_string(),
            scripts: vec!["bin/exseek".to_string()],
            packages: vec!["exseek".to_string()],
            requirements_file: DEFAULT_REQUIREMENTS_FILE.to_string(),
            data_files: vec![DataFilesConfig::default()],
            include_package_data: true,
            zip_safe: false,
        }
    }
}

/// Load manifest configuration from the package root, falling back to the
/// built-in exSEEK defaults when no config file is present.
pub async fn load_config(
    loader: &dyn FileLoader,
    path: &str,
) -> Result<ManifestConfig> {
    if let Some(content) = loader.get_file_content(path).await? {
        let config: ManifestConfig = toml::from_str(&content)?;
        Ok(config)
    } else {
        log::info!("manifest configuration not found: using defaults");
        Ok(ManifestConfig::default())
    }
}
