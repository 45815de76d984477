//! File loading abstraction for package content retrieval.
//!
//! Provides a trait for loading file content relative to the package root
//! without coupling the descriptor builder to a specific source (local
//! filesystem, test mocks, etc.).

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::{PackagingError, Result};

/// Abstraction for loading file content from a source.
///
/// # Returns
///
/// * `Ok(Some(String))` - File was found and content loaded successfully
/// * `Ok(None)` - File does not exist at the specified path
/// * `Err(_)` - An error occurred while attempting to load the file
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FileLoader: Send + Sync {
    /// Load the content of a file at a path relative to the package root.
    async fn get_file_content(&self, path: &str) -> Result<Option<String>>;
}

/// Loads files from the package root directory on the local filesystem.
pub struct LocalFiles {
    root: PathBuf,
}

impl LocalFiles {
    /// Create a loader rooted at the given package directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl FileLoader for LocalFiles {
    async fn get_file_content(&self, path: &str) -> Result<Option<String>> {
        let full_path = self.root.join(path);
        if !full_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&full_path)
            .await
            .map_err(|e| PackagingError::file_access(path, e.to_string()))?;
        Ok(Some(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn loads_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        std_fs::write(temp_dir.path().join("requirements.txt"), "numpy\n")
            .unwrap();

        let loader = LocalFiles::new(temp_dir.path());
        let content = loader.get_file_content("requirements.txt").await.unwrap();

        assert_eq!(content, Some("numpy\n".to_string()));
    }

    #[tokio::test]
    async fn returns_none_for_missing_file() {
        let temp_dir = TempDir::new().unwrap();

        let loader = LocalFiles::new(temp_dir.path());
        let content = loader.get_file_content("requirements.txt").await.unwrap();

        assert!(content.is_none());
    }

    #[tokio::test]
    async fn resolves_nested_paths_against_root() {
        let temp_dir = TempDir::new().unwrap();
        std_fs::create_dir(temp_dir.path().join("bin")).unwrap();
        std_fs::write(temp_dir.path().join("bin/exseek"), "#!/bin/bash\n")
            .unwrap();

        let loader = LocalFiles::new(temp_dir.path());
        let content = loader.get_file_content("bin/exseek").await.unwrap();

        assert_eq!(content, Some("#!/bin/bash\n".to_string()));
    }
}
