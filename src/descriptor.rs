//! Installer descriptor construction and rendering.
//!
//! The descriptor is the structured metadata record a downstream packaging
//! tool consumes to build and install the distributable pipeline package.
use log::*;
use semver::Version as SemVer;
use serde::Serialize;
use url::Url;

use crate::{
    config::ManifestConfig,
    error::{PackagingError, Result},
    file_loader::FileLoader,
    requirements,
};

/// A resolved data-file mapping carried into the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFiles {
    pub destination: String,
    pub sources: Vec<String>,
}

/// Structured metadata record consumed by the downstream packaging tool.
///
/// Constructed once per invocation and immutable thereafter; field order
/// here is the order the rendered output declares them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageDescriptor {
    pub name: String,
    pub version: String,
    pub description: String,
    pub url: String,
    pub scripts: Vec<String>,
    pub packages: Vec<String>,
    pub install_requires: Vec<String>,
    pub data_files: Vec<DataFiles>,
    pub include_package_data: bool,
    pub zip_safe: bool,
}

impl PackageDescriptor {
    /// Render the descriptor as pretty JSON.
    pub fn render(&self) -> Result<String> {
        let rendered = serde_json::to_string_pretty(self)?;
        Ok(rendered)
    }
}

/// Assembles the installer descriptor from manifest config and the
/// requirements file.
pub struct DescriptorBuilder {}

impl DescriptorBuilder {
    pub fn new() -> Self {
        Self {}
    }

    /// Build the descriptor.
    ///
    /// The requirements file is read through the loader; a missing or
    /// unreadable file is fatal and no partial descriptor is returned.
    /// Script contents and data-file sources are not validated here, the
    /// downstream packaging tool reports those at its own build time.
    pub async fn build(
        &self,
        config: &ManifestConfig,
        loader: &dyn FileLoader,
    ) -> Result<PackageDescriptor> {
        if config.name.trim().is_empty() {
            return Err(PackagingError::invalid_manifest(
                "package name must not be empty",
            ));
        }

        SemVer::parse(&config.version)?;
        Url::parse(&config.url)?;

        let install_requires =
            requirements::load(loader, &config.requirements_file).await?;

        info!(
            "resolved {} dependency specifiers from {}",
            install_requires.len(),
            config.requirements_file
        );

        let data_files = config
            .data_files
            .iter()
            .map(|d| DataFiles {
                destination: d.destination.clone(),
                sources: d.sources.clone(),
            })
            .collect();

        Ok(PackageDescriptor {
            name: config.name.clone(),
            version: config.version.clone(),
            description: config.description.clone(),
            url: config.url.clone(),
            scripts: config.scripts.clone(),
            packages: config.packages.clone(),
            install_requires,
            data_files,
            include_package_data: config.include_package_data,
            zip_safe: config.zip_safe,
        })
    }
}
