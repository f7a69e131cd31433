//! Detecting whether the filesystem behind a directory folds case.
//!
//! The probe writes a short-lived marker file into the directory and asks
//! whether the same name with every letter's case swapped refers to the same
//! entry. Identity is decided by file identity, not by mere existence: on a
//! case-sensitive filesystem an unrelated file could already sit at the
//! swapped name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const MARKER_PREFIX: &str = ".foldpath-probe-";

/// Case-sensitivity probe for a single directory.
///
/// When the directory is not writable the probe can fall back to comparing an
/// entry that already exists there. The fallback is on by default.
///
/// # Examples
///
/// ```
/// use foldpath::path::CaseProbe;
///
/// let dir = tempfile::tempdir().unwrap();
/// let sensitive = CaseProbe::new().run(dir.path()).unwrap();
/// // The marker file never outlives the call.
/// assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
/// # let _ = sensitive;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseProbe {
    fallback: bool,
}

impl Default for CaseProbe {
    fn default() -> Self {
        Self { fallback: true }
    }
}

impl CaseProbe {
    /// Create a probe with the read-only fallback enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the read-only fallback for unwritable directories.
    #[must_use]
    pub fn with_fallback(mut self, fallback: bool) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns `true` if the filesystem holding `directory` is case-sensitive.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `directory` is empty or not an
    ///   existing directory.
    /// - [`Error::ProbeFailed`] if the marker cannot be created (and no
    ///   fallback applies), inspected or removed.
    pub fn run(&self, directory: impl AsRef<Path>) -> Result<bool> {
        let directory = directory.as_ref();
        check_directory(directory)?;

        let marker = match tempfile::Builder::new()
            .prefix(MARKER_PREFIX)
            .tempfile_in(directory)
        {
            Ok(marker) => marker,
            Err(e) => return self.marker_unavailable(directory, e),
        };

        let verdict = marker_is_distinct(marker.path());
        // close() reports removal failures; drop ignores them.
        marker.close().map_err(|source| Error::ProbeFailed {
            directory: directory.to_path_buf(),
            source,
        })?;

        let sensitive = verdict.map_err(|source| Error::ProbeFailed {
            directory: directory.to_path_buf(),
            source,
        })?;
        log::debug!(
            "{} is case-{}",
            directory.display(),
            if sensitive { "sensitive" } else { "insensitive" }
        );
        Ok(sensitive)
    }

    /// Answer without a marker after creating one in `directory` failed.
    fn marker_unavailable(&self, directory: &Path, create_error: io::Error) -> Result<bool> {
        if self.fallback && is_unwritable(&create_error) {
            log::warn!(
                "{} is not writable ({create_error}), probing an existing entry instead",
                directory.display()
            );
            return read_only_probe(directory, create_error);
        }
        Err(Error::ProbeFailed {
            directory: directory.to_path_buf(),
            source: create_error,
        })
    }
}

/// Errors meaning the directory cannot be written, as opposed to a broken one.
fn is_unwritable(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem
    )
}

/// Returns `true` if the filesystem holding `directory` is case-sensitive.
///
/// Shorthand for [`CaseProbe::new().run(directory)`](CaseProbe::run).
///
/// # Errors
///
/// See [`CaseProbe::run`].
pub fn is_fs_case_sensitive(directory: impl AsRef<Path>) -> Result<bool> {
    CaseProbe::new().run(directory)
}

fn check_directory(directory: &Path) -> Result<()> {
    if directory.as_os_str().is_empty() {
        return Err(Error::invalid_argument("directory", "must not be empty"));
    }
    if !directory.is_dir() {
        return Err(Error::invalid_argument(
            "directory",
            format!("{} is not an existing directory", directory.display()),
        ));
    }
    Ok(())
}

fn marker_is_distinct(marker: &Path) -> io::Result<bool> {
    let swapped = swapped_sibling(marker).ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidData, "marker name has no cased letters")
    })?;
    Ok(!same_entry(marker, &swapped)?)
}

fn read_only_probe(directory: &Path, create_error: io::Error) -> Result<bool> {
    let failed = |source| Error::ProbeFailed {
        directory: directory.to_path_buf(),
        source,
    };

    for entry in fs::read_dir(directory).map_err(failed)? {
        let original = entry.map_err(failed)?.path();
        if let Some(swapped) = swapped_sibling(&original) {
            return same_entry(&original, &swapped)
                .map(|same| !same)
                .map_err(failed);
        }
    }
    Err(failed(create_error))
}

/// `path` with the case of every letter in its final name swapped, or `None`
/// if swapping would not change the name.
fn swapped_sibling(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?.to_str()?;
    let swapped = swap_case(name);
    (swapped != name).then(|| path.with_file_name(swapped))
}

fn swap_case(name: &str) -> String {
    name.chars()
        .flat_map(|c| {
            if c.is_lowercase() {
                c.to_uppercase().collect::<Vec<_>>()
            } else if c.is_uppercase() {
                c.to_lowercase().collect()
            } else {
                vec![c]
            }
        })
        .collect()
}

#[cfg(unix)]
fn same_entry(original: &Path, swapped: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let a = fs::symlink_metadata(original)?;
    match fs::symlink_metadata(swapped) {
        Ok(b) => Ok(a.dev() == b.dev() && a.ino() == b.ino()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(not(unix))]
fn same_entry(original: &Path, swapped: &Path) -> io::Result<bool> {
    fs::symlink_metadata(original)?;
    match fs::symlink_metadata(swapped) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    }

    // The swapped spelling opens something. It is the same entry unless the
    // directory lists that spelling as an entry of its own.
    let Some(parent) = swapped.parent() else {
        return Ok(true);
    };
    let name = swapped.file_name();
    for entry in fs::read_dir(parent)? {
        if Some(entry?.file_name().as_os_str()) == name {
            return Ok(false);
        }
    }
    Ok(true)
}
