//! Environment variable handling for configuration overrides.
//!
//! `FOLDPATH_*` variables override values from configuration files.

use std::env;
use std::path::PathBuf;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Overrides [`Config::root`].
pub const ROOT_ENV: &str = "FOLDPATH_ROOT";
/// Overrides [`Config::conflict_suffix`].
pub const CONFLICT_SUFFIX_ENV: &str = "FOLDPATH_CONFLICT_SUFFIX";
/// Overrides [`Config::probe_fallback`].
pub const PROBE_FALLBACK_ENV: &str = "FOLDPATH_PROBE_FALLBACK";
/// Overrides [`Config::output_format`].
pub const OUTPUT_FORMAT_ENV: &str = "FOLDPATH_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use foldpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if a boolean or output format value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(root) = Self::var(ROOT_ENV) {
            config.root = Some(PathBuf::from(root));
        }

        if let Some(suffix) = Self::var(CONFLICT_SUFFIX_ENV) {
            config.conflict_suffix = Some(suffix);
        }

        if let Some(val) = Self::var(PROBE_FALLBACK_ENV) {
            config.probe_fallback = Some(Self::parse_bool(PROBE_FALLBACK_ENV, &val)?);
        }

        if let Some(val) = Self::var(OUTPUT_FORMAT_ENV) {
            let format = val.parse::<OutputFormat>().map_err(|message| Error::Validation {
                field: OUTPUT_FORMAT_ENV.into(),
                message,
            })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.is_empty())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
