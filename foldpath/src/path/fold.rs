//! Unicode case folding for path names.
//!
//! Filesystems that ignore case compare names with a Unicode-aware fold, not
//! an ASCII one, so `Straße` and `STRASSE` name the same entry on most of them.
//! Folding upper-cases first and lower-cases second so that one-to-many
//! mappings such as `ß -> SS` land on the same representation as their
//! expanded spelling.

use std::ffi::OsStr;
use std::path::Path;

/// Fold a single name (or any string) to its case-insensitive key.
///
/// # Examples
///
/// ```
/// use foldpath::path::fold::fold_case;
///
/// assert_eq!(fold_case("Test Folder"), "test folder");
/// assert_eq!(fold_case("Straße"), fold_case("STRASSE"));
/// assert_eq!(fold_case("ΣΊΣΥΦΟΣ"), fold_case("σίσυφος"));
/// ```
#[must_use]
pub fn fold_case(name: &str) -> String {
    name.chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two directory entry names case-insensitively.
///
/// Names that are not valid Unicode cannot be folded meaningfully and only
/// match byte-for-byte.
///
/// # Examples
///
/// ```
/// use foldpath::path::fold::names_match;
/// use std::ffi::OsStr;
///
/// assert!(names_match(OsStr::new("File.TXT"), OsStr::new("file.txt")));
/// assert!(!names_match(OsStr::new("file.txt"), OsStr::new("file.txt.bak")));
/// ```
#[must_use]
pub fn names_match(a: &OsStr, b: &OsStr) -> bool {
    match (a.to_str(), b.to_str()) {
        (Some(a), Some(b)) => a == b || fold_case(a) == fold_case(b),
        _ => a == b,
    }
}

/// Fold an entire path into the key a case-insensitive service would use.
///
/// Non-Unicode sequences are replaced lossily, so the key is for lookup and
/// comparison only, never for opening files.
///
/// # Examples
///
/// ```
/// use foldpath::path::fold::fold_path;
/// use std::path::Path;
///
/// assert_eq!(fold_path(Path::new("/Photos/Summer")), "/photos/summer");
/// ```
#[must_use]
pub fn fold_path(path: &Path) -> String {
    fold_case(&path.to_string_lossy())
}
