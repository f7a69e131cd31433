//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use foldpath::config::{Config, ConfigMerger};
///
/// let low = Config { conflict_suffix: Some("low".to_string()), ..Default::default() };
/// let high = Config { conflict_suffix: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.conflict_suffix(), "high");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target where set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.root.is_some() {
            target.root.clone_from(&source.root);
        }

        if source.conflict_suffix.is_some() {
            target.conflict_suffix.clone_from(&source.conflict_suffix);
        }

        if source.probe_fallback.is_some() {
            target.probe_fallback = source.probe_fallback;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
