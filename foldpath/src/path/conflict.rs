//! Non-colliding names for entries that clash by case.
//!
//! When a remote entry would land next to a local entry that differs only by
//! case, one of them is renamed to `name (case conflict).ext`, then
//! `name (case conflict 1).ext` and so on until the name is free under every
//! casing.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::candidates::CaseResolver;
use crate::path::lister::DirectoryLister;
use crate::path::root::Root;

/// Suffix used when none is configured.
pub const DEFAULT_CONFLICT_SUFFIX: &str = "case conflict";

impl<L: DirectoryLister> CaseResolver<L> {
    /// Find a sibling name for `path` that does not exist under any casing.
    ///
    /// Existence is checked with `path` read relative to `root`, as in
    /// [`equivalent_path_candidates`](Self::equivalent_path_candidates); the
    /// returned name keeps the form of `path`. `path` itself does not need to
    /// exist.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `suffix` is empty or contains a path
    ///   separator, or if `path` has no final name.
    /// - The errors of
    ///   [`equivalent_path_candidates`](Self::equivalent_path_candidates).
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::{CaseResolver, MemoryLister, Root};
    /// use std::path::PathBuf;
    ///
    /// let mut tree = MemoryLister::new();
    /// tree.add_file("/sync/Report.pdf");
    /// tree.add_file("/sync/report (case conflict).pdf");
    /// let resolver = CaseResolver::with_lister(tree);
    ///
    /// # #[cfg(unix)]
    /// assert_eq!(
    ///     resolver
    ///         .conflict_free_name("/sync/report.pdf", &Root::Filesystem, "case conflict")
    ///         .unwrap(),
    ///     PathBuf::from("/sync/report (case conflict 1).pdf")
    /// );
    /// # #[cfg(unix)]
    /// assert_eq!(
    ///     resolver
    ///         .conflict_free_name("REPORT.pdf", &Root::dir("/sync"), "case conflict")
    ///         .unwrap(),
    ///     PathBuf::from("REPORT (case conflict 1).pdf")
    /// );
    /// ```
    pub fn conflict_free_name(
        &self,
        path: impl AsRef<Path>,
        root: &Root,
        suffix: &str,
    ) -> Result<PathBuf> {
        let path = path.as_ref();
        check_suffix(suffix)?;
        let stem = path.file_stem().ok_or_else(|| {
            Error::invalid_argument("path", format!("{} has no file name", path.display()))
        })?;
        let extension = path.extension();

        let mut counter: u64 = 0;
        loop {
            let label = if counter == 0 {
                suffix.to_string()
            } else {
                format!("{suffix} {counter}")
            };
            let mut name = OsString::from(stem);
            name.push(format!(" ({label})"));
            if let Some(ext) = extension {
                name.push(".");
                name.push(ext);
            }

            let candidate = path.with_file_name(name);
            if !self.normalized_path_exists(&candidate, root)? {
                return Ok(candidate);
            }
            log::debug!("{} is taken", candidate.display());
            counter += 1;
        }
    }
}

fn check_suffix(suffix: &str) -> Result<()> {
    if suffix.trim().is_empty() {
        return Err(Error::invalid_argument("suffix", "must not be empty"));
    }
    if suffix.chars().any(std::path::is_separator) {
        return Err(Error::invalid_argument(
            "suffix",
            "must not contain path separators",
        ));
    }
    Ok(())
}

/// Find a conflict-free sibling name on the real filesystem.
///
/// # Errors
///
/// See [`CaseResolver::conflict_free_name`].
pub fn conflict_free_name(path: impl AsRef<Path>, root: &Root, suffix: &str) -> Result<PathBuf> {
    CaseResolver::new().conflict_free_name(path, root, suffix)
}
