//! Requirements file parsing for the runtime dependency list.
use log::*;
use regex::Regex;
use std::sync::LazyLock;

use crate::{
    error::{PackagingError, Result},
    file_loader::FileLoader,
};

static SPECIFIER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?(?:\[[A-Za-z0-9._, -]+\])?\s*(?:[<>!=~]=?\s*\S.*)?$",
    )
    .unwrap()
});

/// Parse requirements content into the ordered dependency-specifier list.
///
/// Each line is whitespace-trimmed and kept in file order, duplicates
/// included. Blank lines are skipped. Comment lines pass through verbatim
/// so the downstream tool sees exactly what the file declares.
pub fn parse(content: &str) -> Vec<String> {
    let mut specifiers: Vec<String> = vec![];

    for line in content.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            debug!("skipping blank requirements line");
            continue;
        }

        if trimmed.starts_with('#') {
            warn!(
                "passing comment line through as a dependency specifier: {}",
                trimmed
            );
        }

        specifiers.push(trimmed.to_string());
    }

    specifiers
}

/// True when a specifier does not look like `name[==version]`.
pub fn is_suspect(specifier: &str) -> bool {
    !SPECIFIER_REGEX.is_match(specifier)
}

/// Load and parse the requirements file through the loader.
///
/// The file is required: a missing or unreadable file aborts descriptor
/// construction.
pub async fn load(
    loader: &dyn FileLoader,
    path: &str,
) -> Result<Vec<String>> {
    let content = loader.get_file_content(path).await?;

    match content {
        Some(content) => Ok(parse(&content)),
        None => Err(PackagingError::file_access(path, "file not found")),
    }
}
