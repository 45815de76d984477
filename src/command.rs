//! Command execution for the packaging CLI.
//!
//! Each command module follows the same pattern: resolve the package root,
//! load the manifest configuration, construct the descriptor, then perform
//! the command-specific work. All failures flow through the unified
//! `PackagingError` taxonomy.

/// Construct the installer descriptor and emit it as JSON.
pub mod build;

/// Validate the package tree the descriptor points at.
pub mod check;
