//! CLI argument parsing for the packaging commands.
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

pub const DEFAULT_PACKAGE_ROOT: &str = ".";

/// Global CLI arguments for package location and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_PACKAGE_ROOT, global = true)]
    /// Package root directory that relative paths resolve against.
    pub root: String,

    #[arg(long, default_value = DEFAULT_CONFIG_FILE, global = true)]
    /// Manifest config file, relative to the package root.
    pub config: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Packaging operation subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Construct the installer descriptor and emit it as JSON.
    Build {
        #[arg(long)]
        /// Write the rendered descriptor to this file instead of stdout.
        output: Option<String>,
    },

    /// Report anything a downstream packaging run would trip over.
    Check,
}
