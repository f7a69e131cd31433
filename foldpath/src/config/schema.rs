//! Configuration schema definitions.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::{Root, DEFAULT_CONFLICT_SUFFIX};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; the accessor
/// methods supply the built-in defaults.
///
/// # Examples
///
/// ```
/// use foldpath::config::{Config, OutputFormat};
///
/// let config = Config {
///     conflict_suffix: Some("clash".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.conflict_suffix(), "clash");
/// assert!(config.probe_fallback());
/// assert_eq!(config.output_format(), OutputFormat::Text);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default resolution root for relative paths (e.g. a sync folder).
    pub root: Option<PathBuf>,

    /// Label used when generating case-conflict names.
    pub conflict_suffix: Option<String>,

    /// Allow the read-only probe when a directory is not writable.
    pub probe_fallback: Option<bool>,

    /// Output format for CLI results.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured conflict suffix, or `case conflict`.
    #[must_use]
    pub fn conflict_suffix(&self) -> &str {
        self.conflict_suffix
            .as_deref()
            .unwrap_or(DEFAULT_CONFLICT_SUFFIX)
    }

    /// Whether the probe may fall back to a read-only check. Defaults to on.
    #[must_use]
    pub fn probe_fallback(&self) -> bool {
        self.probe_fallback.unwrap_or(true)
    }

    /// The configured output format, or [`OutputFormat::Text`].
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// The configured root, if any.
    #[must_use]
    pub fn root(&self) -> Option<Root> {
        self.root.clone().map(Root::Dir)
    }
}

/// Output format for CLI results.
///
/// # Examples
///
/// ```
/// use foldpath::config::OutputFormat;
///
/// let format: OutputFormat = "JSON".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One result per line.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("invalid output format: {s} (expected text or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config_parses() {
        let yaml = r"
root: ~/Dropbox
conflict_suffix: case clash
probe_fallback: false
output_format: json
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.root, Some(PathBuf::from("~/Dropbox")));
        assert_eq!(config.conflict_suffix(), "case clash");
        assert!(!config.probe_fallback());
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.root(), Some(Root::dir("~/Dropbox")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.conflict_suffix(), DEFAULT_CONFLICT_SUFFIX);
        assert!(config.probe_fallback());
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(config.root().is_none());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("colour: blue\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        let result: Result<Config, _> = serde_yaml::from_str("output_format: csv\n");
        assert!(result.is_err());
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = Config {
            root: Some(PathBuf::from("/srv/sync")),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_output_format_json_name() {
        let value = serde_json::to_value(OutputFormat::Json).unwrap();
        assert_eq!(value, serde_json::json!("json"));
    }
}
