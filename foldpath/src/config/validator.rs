//! Configuration validation.

use std::path::{is_separator, Component, Path};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use foldpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { conflict_suffix: Some("a/b".into()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.root {
            Self::validate_root(root)?;
        }
        if let Some(ref suffix) = config.conflict_suffix {
            Self::validate_suffix(suffix)?;
        }
        Ok(())
    }

    /// A root must be absolute or start at the home directory (`~`).
    fn validate_root(root: &Path) -> Result<()> {
        let from_home = matches!(root.components().next(), Some(Component::Normal(c)) if c == "~");
        if root.as_os_str().is_empty() || !(root.is_absolute() || from_home) {
            return Err(Error::Validation {
                field: "root".into(),
                message: format!(
                    "must be an absolute path or start with ~, got '{}'",
                    root.display()
                ),
            });
        }
        Ok(())
    }

    fn validate_suffix(suffix: &str) -> Result<()> {
        if suffix.trim().is_empty() {
            return Err(Error::Validation {
                field: "conflict_suffix".into(),
                message: "must not be empty".into(),
            });
        }
        if suffix.chars().any(is_separator) {
            return Err(Error::Validation {
                field: "conflict_suffix".into(),
                message: format!("must not contain path separators, got '{suffix}'"),
            });
        }
        if suffix.contains(['(', ')']) {
            return Err(Error::Validation {
                field: "conflict_suffix".into(),
                message: "must not contain parentheses; they are added around it".into(),
            });
        }
        Ok(())
    }
}
