//! Common test helper functions shared across test modules.
use crate::config::ManifestConfig;

/// Creates a test ManifestConfig with the given name and version, all other
/// fields at their exSEEK defaults.
pub fn create_test_manifest(name: &str, version: &str) -> ManifestConfig {
    ManifestConfig {
        name: name.to_string(),
        version: version.to_string(),
        ..ManifestConfig::default()
    }
}
