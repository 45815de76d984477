//! Package tree validation command implementation.
//!
//! Build-time descriptor construction defers script and data-file
//! existence to the downstream packaging tool. This command surfaces those
//! deferred failures early, without changing their severity: findings are
//! reported, not fatal.
use log::*;
use std::fmt;

use crate::{
    cli, config,
    descriptor::{DescriptorBuilder, PackageDescriptor},
    error::Result,
    file_loader::{FileLoader, LocalFiles},
    requirements,
};

/// Findings a downstream packaging run would surface as its own errors.
#[derive(Debug, Default, Clone)]
pub struct CheckReport {
    /// Declared files absent from the package tree.
    pub missing_files: Vec<String>,
    /// Dependency specifiers that do not look like `name[==version]`.
    pub suspect_specifiers: Vec<String>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing_files.is_empty() && self.suspect_specifiers.is_empty()
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Check Report:")?;
        writeln!(f, "  Missing files: {}", self.missing_files.len())?;
        for path in &self.missing_files {
            writeln!(f, "    {}", path)?;
        }
        writeln!(
            f,
            "  Suspect specifiers: {}",
            self.suspect_specifiers.len()
        )?;
        for specifier in &self.suspect_specifiers {
            writeln!(f, "    {}", specifier)?;
        }
        Ok(())
    }
}

/// Execute check command to report what the downstream packaging tool
/// would trip over in the current package tree.
pub async fn execute(args: &cli::Args) -> Result<()> {
    let loader = LocalFiles::new(&args.root);

    let manifest = config::load_config(&loader, &args.config).await?;

    let descriptor = DescriptorBuilder::new().build(&manifest, &loader).await?;

    let report = check_package(&descriptor, &loader).await?;

    if report.is_clean() {
        info!("package tree is complete: nothing to report");
    } else {
        warn!("{report}");
    }

    Ok(())
}

/// Probe every file the descriptor points at and screen the dependency
/// list for suspect specifiers.
pub async fn check_package(
    descriptor: &PackageDescriptor,
    loader: &dyn FileLoader,
) -> Result<CheckReport> {
    let mut report = CheckReport::default();

    for script in &descriptor.scripts {
        if loader.get_file_content(script).await?.is_none() {
            report.missing_files.push(script.clone());
        }
    }

    for data_files in &descriptor.data_files {
        for source in &data_files.sources {
            if loader.get_file_content(source).await?.is_none() {
                report.missing_files.push(source.clone());
            }
        }
    }

    for specifier in &descriptor.install_requires {
        if requirements::is_suspect(specifier) {
            report.suspect_specifiers.push(specifier.clone());
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ManifestConfig;
    use crate::file_loader::MockFileLoader;

    async fn build_default_descriptor(
        requirements: &str,
    ) -> PackageDescriptor {
        let config = ManifestConfig::default();
        let mut mock_loader = MockFileLoader::new();
        mock_loader.expect_get_file_content().returning({
            let content = requirements.to_string();
            move |path| match path {
                "requirements.txt" => Ok(Some(content.clone())),
                _ => Ok(None),
            }
        });

        DescriptorBuilder::new()
            .build(&config, &mock_loader)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn clean_tree_reports_nothing() {
        let descriptor = build_default_descriptor("numpy==1.16\n").await;

        let mut mock_loader = MockFileLoader::new();
        mock_loader
            .expect_get_file_content()
            .returning(|_| Ok(Some("content".to_string())));

        let report =
            check_package(&descriptor, &mock_loader).await.unwrap();

        assert!(report.is_clean());
    }

    #[tokio::test]
    async fn reports_missing_script_and_data_files() {
        let descriptor = build_default_descriptor("numpy==1.16\n").await;

        let mut mock_loader = MockFileLoader::new();
        mock_loader
            .expect_get_file_content()
            .returning(|_| Ok(None));

        let report =
            check_package(&descriptor, &mock_loader).await.unwrap();

        assert_eq!(
            report.missing_files,
            vec!["bin/exseek".to_string(), "LICENSE".to_string()]
        );
        assert!(report.suspect_specifiers.is_empty());
        assert!(!report.is_clean());
    }

    #[tokio::test]
    async fn reports_suspect_specifiers() {
        let descriptor =
            build_default_descriptor("# comment\nnumpy==1.16\n").await;

        let mut mock_loader = MockFileLoader::new();
        mock_loader
            .expect_get_file_content()
            .returning(|_| Ok(Some("content".to_string())));

        let report =
            check_package(&descriptor, &mock_loader).await.unwrap();

        assert_eq!(
            report.suspect_specifiers,
            vec!["# comment".to_string()]
        );
    }

    #[test]
    fn report_display_lists_findings() {
        let report = CheckReport {
            missing_files: vec!["bin/exseek".to_string()],
            suspect_specifiers: vec!["# comment".to_string()],
        };

        let output = report.to_string();

        assert!(output.contains("Missing files: 1"));
        assert!(output.contains("bin/exseek"));
        assert!(output.contains("Suspect specifiers: 1"));
        assert!(output.contains("# comment"));
    }
}
