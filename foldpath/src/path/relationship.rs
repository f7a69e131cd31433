//! Path relationship checking.
//!
//! These checks are purely textual: nothing is read from disk and casing is
//! compared exactly. Fold both sides with [`fold_path`](super::fold::fold_path)
//! first to compare remote-style case-insensitive paths.
//!
//! All comparisons ignore trailing separators and only accept a prefix that
//! ends on a separator boundary, so `/parent/pathology` is never inside
//! `/parent/path`.

use std::fmt;
use std::path::is_separator;

use crate::error::{Error, Result};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use foldpath::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project").unwrap(),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same once trailing separators are removed.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either path is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b").unwrap(), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a").unwrap(), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a").unwrap(), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/ab").unwrap(), PathRelationship::Unrelated);
    /// ```
    pub fn between(first: &str, second: &str) -> Result<Self> {
        if first.is_empty() {
            return Err(Error::invalid_argument("first", "must not be empty"));
        }
        if second.is_empty() {
            return Err(Error::invalid_argument("second", "must not be empty"));
        }

        let rel = if trim(first) == trim(second) {
            Self::Same
        } else if is_child(second, first)? {
            Self::Ancestor
        } else if is_child(first, second)? {
            Self::Descendant
        } else {
            Self::Unrelated
        };
        Ok(rel)
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::PathRelationship;
    ///
    /// let desc = PathRelationship::Ancestor.description("/a", "/a/b");
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, first: &str, second: &str) -> String {
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same path"),
            Self::Unrelated => format!("{first} and {second} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Strict descendant test: is `path` strictly inside `parent`?
///
/// Trailing separators on either argument are ignored. A path is never a
/// child of itself.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `parent` is empty.
///
/// # Examples
///
/// ```
/// use foldpath::path::is_child;
///
/// assert!(is_child("/parent/path/child", "/parent/path/").unwrap());
/// assert!(is_child("/parent/path/child/", "/parent/path").unwrap());
/// assert!(!is_child("/parent/path", "/parent/path").unwrap());
/// assert!(!is_child("/path1", "/path2").unwrap());
/// ```
pub fn is_child(path: &str, parent: &str) -> Result<bool> {
    if parent.is_empty() {
        return Err(Error::invalid_argument("parent", "must not be empty"));
    }

    let path = trim(path);
    let parent = trim(parent);
    Ok(path
        .strip_prefix(parent)
        .is_some_and(|rest| rest.len() > 1 && rest.starts_with(is_separator)))
}

/// Like [`is_child`] but also true when both name the same path.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `parent` is empty.
///
/// # Examples
///
/// ```
/// use foldpath::path::is_equal_or_child;
///
/// assert!(is_equal_or_child("/a/b/", "/a/b").unwrap());
/// assert!(is_equal_or_child("/a/b/c", "/a/b").unwrap());
/// assert!(!is_equal_or_child("/a/bc", "/a/b").unwrap());
/// ```
pub fn is_equal_or_child(path: &str, parent: &str) -> Result<bool> {
    Ok(is_child(path, parent)? || trim(path) == trim(parent))
}

// `/` trims to the empty string, which still prefixes every absolute path
// with a separator right after it.
fn trim(path: &str) -> &str {
    path.trim_end_matches(is_separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_child_examples() {
        assert!(is_child("/parent/path/child", "/parent/path/").unwrap());
        assert!(is_child("/parent/path/child/", "/parent/path").unwrap());
        assert!(!is_child("/parent/path", "/parent/path").unwrap());
        assert!(!is_child("/path1", "/path2").unwrap());
    }

    #[test]
    fn test_is_child_trailing_separators_on_equal_paths() {
        for (a, b) in [("/x", "/x/"), ("/x/", "/x"), ("/x//", "/x/"), ("/x", "/x")] {
            assert!(!is_child(a, b).unwrap(), "{a} vs {b}");
        }
    }

    #[test]
    fn test_is_child_requires_separator_boundary() {
        assert!(!is_child("/parent/pathology", "/parent/path").unwrap());
        assert!(!is_child("/parent/pat", "/parent/path").unwrap());
        assert!(!is_child("/parent/path_2/file", "/parent/path").unwrap());
    }

    #[test]
    fn test_is_child_of_filesystem_root() {
        assert!(is_child("/usr", "/").unwrap());
        assert!(is_child("/usr/local", "/").unwrap());
        assert!(!is_child("/", "/").unwrap());
        assert!(!is_child("usr", "/").unwrap());
    }

    #[test]
    fn test_is_child_deep_descendant() {
        assert!(is_child("/a/b/c/d", "/a").unwrap());
    }

    #[test]
    fn test_is_child_is_case_sensitive() {
        assert!(!is_child("/Parent/child", "/parent").unwrap());
    }

    #[test]
    fn test_is_child_empty_arguments() {
        assert!(is_child("/a", "").unwrap_err().is_invalid_argument());
        assert!(!is_child("", "/a").unwrap());
    }

    #[test]
    fn test_is_equal_or_child() {
        assert!(is_equal_or_child("/a", "/a/").unwrap());
        assert!(is_equal_or_child("/a/b", "/a").unwrap());
        assert!(!is_equal_or_child("/a", "/a/b").unwrap());
        assert!(is_equal_or_child("x", "").is_err());
    }

    #[test]
    fn test_relationship_between() {
        let cases = [
            ("/a", "/a/b", PathRelationship::Ancestor),
            ("/a/b/c/d", "/a/b", PathRelationship::Descendant),
            ("/a/b/c", "/a/b/c/", PathRelationship::Same),
            ("/a/b", "/a/c", PathRelationship::Unrelated),
            ("/a", "/ab", PathRelationship::Unrelated),
        ];
        for (first, second, expected) in cases {
            assert_eq!(PathRelationship::between(first, second).unwrap(), expected);
        }
    }

    #[test]
    fn test_relationship_rejects_empty() {
        assert!(PathRelationship::between("", "/a").is_err());
        assert!(PathRelationship::between("/a", "").is_err());
    }

    #[test]
    fn test_is_hierarchical() {
        assert!(PathRelationship::Ancestor.is_hierarchical());
        assert!(PathRelationship::Descendant.is_hierarchical());
        assert!(PathRelationship::Same.is_hierarchical());
        assert!(!PathRelationship::Unrelated.is_hierarchical());
    }

    #[test]
    fn test_description() {
        let desc = PathRelationship::Descendant.description("/a/b", "/a");
        assert_eq!(desc, "/a/b is a descendant of /a");

        let desc = PathRelationship::Same.description("/a", "/a/");
        assert!(desc.contains("same"));

        let desc = PathRelationship::Unrelated.description("/a", "/b");
        assert!(desc.contains("unrelated"));
    }

    #[test]
    fn test_display() {
        assert_eq!(PathRelationship::Ancestor.to_string(), "ancestor");
        assert_eq!(PathRelationship::Unrelated.to_string(), "unrelated");
    }
}
