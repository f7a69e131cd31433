//! Error types for the foldpath library.
//!
//! Absence of a matching path is not an error anywhere in the resolution
//! engine: it shows up as an empty candidate set, `false`, or an unchanged
//! input. The variants here cover what genuinely crosses the library boundary:
//! malformed arguments, probe failures, and the configuration layer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a foldpath error.
///
/// # Examples
///
/// ```
/// use foldpath::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the foldpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller supplied an argument that cannot be acted on.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// No entry matches the path under any casing.
    ///
    /// Only returned by the strict lookups; the best-effort operations
    /// report absence through their return value instead.
    #[error("path not found under any casing: {}", path.display())]
    PathNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The case-sensitivity probe could not create or remove its marker file.
    #[error("case-sensitivity probe failed in {}: {source}", directory.display())]
    ProbeFailed {
        /// The directory being probed.
        directory: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist under any casing.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error was caused by a malformed argument or path.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::Error;
    ///
    /// let err = Error::InvalidArgument { argument: "parent", reason: "empty".into() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::InvalidPath { .. })
    }

    pub(crate) fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_error() {
        let err = Error::invalid_argument("parent", "must not be empty");
        let display = format!("{err}");
        assert!(display.contains("invalid argument"));
        assert!(display.contains("parent"));
        assert!(display.contains("must not be empty"));
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/../path"),
            reason: "parent references are not resolved".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        assert!(display.contains("parent references"));
        assert!(err.is_invalid_argument());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_path_not_found_error() {
        let err = Error::PathNotFound {
            path: PathBuf::from("/Missing/File.txt"),
        };
        let display = format!("{err}").replace(std::path::MAIN_SEPARATOR, "/");
        assert!(display.contains("not found"));
        assert!(display.contains("/Missing/File.txt"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_probe_failed_error_keeps_source() {
        use std::error::Error as _;

        let err = Error::ProbeFailed {
            directory: PathBuf::from("/readonly"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let display = format!("{err}");
        assert!(display.contains("probe failed"));
        assert!(display.contains("denied"));
        assert!(err.source().is_some());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "conflict_suffix".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("conflict_suffix"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
