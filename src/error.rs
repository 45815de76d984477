//! Custom error types for exseek-dist with improved type safety and error handling.

use thiserror::Error;

/// Main error type for packaging operations.
#[derive(Error, Debug)]
pub enum PackagingError {
    // Manifest/configuration errors
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    // File access errors - fatal, aborts packaging
    #[error("Failed to access file {path}: {reason}")]
    FileAccess { path: String, reason: String },

    // Version/parsing errors - automatic conversions via #[from]
    #[error("Invalid version format: {0}")]
    InvalidVersion(#[from] semver::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    // TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    // JSON rendering errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),

    // Generic wrapper for other errors
    #[error(transparent)]
    Other(#[from] color_eyre::Report),
}

/// Result type alias using PackagingError
pub type Result<T> = std::result::Result<T, PackagingError>;

impl PackagingError {
    /// Create an invalid manifest error
    pub fn invalid_manifest(msg: impl Into<String>) -> Self {
        Self::InvalidManifest(msg.into())
    }

    /// Create a file access error with context
    pub fn file_access(
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::FileAccess {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Implement From for std::io::Error - wraps in Other variant for generic I/O errors
impl From<std::io::Error> for PackagingError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(color_eyre::Report::from(err))
    }
}
