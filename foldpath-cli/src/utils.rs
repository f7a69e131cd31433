//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and root selection.

use crate::error::CliError;
use foldpath::{Config, ConfigBuilder, OutputFormat, Root};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Resolve paths relative to this directory.
    pub root: Option<PathBuf>,

    /// Output format override.
    pub format: Option<OutputFormat>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let root = match &global.root {
        Some(root) if root.is_relative() && !root.starts_with("~") => {
            Some(env::current_dir()?.join(root))
        }
        other => other.clone(),
    };
    let overrides = Config {
        root,
        output_format: global.format,
        ..Default::default()
    };

    ConfigBuilder::new()
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// The root to resolve `path` from.
///
/// A configured root wins; otherwise absolute paths start at the filesystem
/// root and relative paths at the working directory.
pub fn resolution_root(config: &Config, path: &Path) -> Root {
    config.root().unwrap_or_else(|| Root::for_path(path))
}

/// Use `dir`, or the working directory when none was given.
pub fn dir_or_cwd(dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(env::current_dir()?),
    }
}
