//! Case-insensitive resolution of a path into the entries that exist on disk.
//!
//! Resolution walks the input one segment at a time. Every directory reached
//! so far is listed and each child whose name folds to the same key as the
//! segment becomes a branch of the next step. On a case-sensitive filesystem
//! `Test Folder` and `test folder` may both exist, so branches are tracked in
//! full rather than cut at the first match.
//!
//! Absence is never an error here. A branch whose directory is missing,
//! unreadable or not a directory simply stops contributing candidates.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::fold::names_match;
use crate::path::lister::{DirectoryLister, FsLister};
use crate::path::root::{segments, Root};

/// Resolves paths case-insensitively against a [`DirectoryLister`].
///
/// The resolver holds no state between calls; it is `Send + Sync` whenever
/// its lister is.
///
/// # Examples
///
/// ```
/// use foldpath::path::{CaseResolver, MemoryLister, Root};
/// use std::path::PathBuf;
///
/// let mut tree = MemoryLister::new();
/// tree.add_file("/sync/Test Folder/File.txt");
/// tree.add_file("/sync/test folder/File.txt");
///
/// let resolver = CaseResolver::with_lister(tree);
/// let found = resolver
///     .equivalent_path_candidates("TEST FOLDER/file.TXT", &Root::dir("/sync"))
///     .unwrap();
///
/// # #[cfg(unix)]
/// assert_eq!(
///     found.into_iter().collect::<Vec<_>>(),
///     vec![
///         PathBuf::from("/sync/Test Folder/File.txt"),
///         PathBuf::from("/sync/test folder/File.txt"),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CaseResolver<L = FsLister> {
    lister: L,
}

impl CaseResolver<FsLister> {
    /// Create a resolver over the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: DirectoryLister> CaseResolver<L> {
    /// Create a resolver over an arbitrary lister.
    pub fn with_lister(lister: L) -> Self {
        Self { lister }
    }

    /// The lister this resolver reads directories through.
    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Find every existing entry that matches `path` under some casing.
    ///
    /// `path` is taken relative to `root`; a leading separator on `path` is
    /// ignored. A path without segments resolves to the root itself when the
    /// root exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `path` contains `..`, or if the root
    /// cannot be made absolute. Missing or unreadable directories are not
    /// errors; they only shrink the result.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use foldpath::path::{CaseResolver, Root};
    ///
    /// let resolver = CaseResolver::new();
    /// let found = resolver
    ///     .equivalent_path_candidates("/USR/LOCAL/SHARE", &Root::Filesystem)
    ///     .unwrap();
    /// assert!(found.contains(std::path::Path::new("/usr/local/share")));
    /// ```
    pub fn equivalent_path_candidates(
        &self,
        path: impl AsRef<Path>,
        root: &Root,
    ) -> Result<BTreeSet<PathBuf>> {
        let path = path.as_ref();
        let names = segments(path)?;
        let base = root.resolve(path)?;

        if names.is_empty() {
            let mut found = BTreeSet::new();
            if self.lister.exists(&base) {
                found.insert(base);
            }
            return Ok(found);
        }

        let mut frontier = BTreeSet::from([base]);
        for name in &names {
            frontier = self.step(&frontier, name);
            if frontier.is_empty() {
                log::debug!(
                    "no entry matches {:?} while resolving {}",
                    name,
                    path.display()
                );
                break;
            }
        }
        Ok(frontier)
    }

    fn step(&self, dirs: &BTreeSet<PathBuf>, name: &OsString) -> BTreeSet<PathBuf> {
        let mut next = BTreeSet::new();
        for dir in dirs {
            match self.lister.list(dir) {
                Ok(children) => next.extend(
                    children
                        .into_iter()
                        .filter(|child| names_match(child, name))
                        .map(|child| dir.join(child)),
                ),
                Err(e) => log::debug!("dropping branch {}: {e}", dir.display()),
            }
        }
        next
    }

    /// Recover the on-disk casing of `path`, or return it unchanged.
    ///
    /// Absolute inputs resolve from [`Root::Filesystem`] and relative inputs
    /// from [`Root::CurrentDir`]. When several entries match, the one spelled
    /// exactly like `path` wins if it exists, otherwise the
    /// lexicographically smallest. Malformed inputs and paths that do
    /// not exist under any casing come back as given.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::{CaseResolver, MemoryLister};
    /// use std::path::PathBuf;
    ///
    /// let mut tree = MemoryLister::new();
    /// tree.add_dir("/usr/local/share");
    /// let resolver = CaseResolver::with_lister(tree);
    ///
    /// # #[cfg(unix)]
    /// # {
    /// assert_eq!(resolver.denormalize_path("/Usr/Local/Share"), PathBuf::from("/usr/local/share"));
    /// assert_eq!(resolver.denormalize_path("/nowhere"), PathBuf::from("/nowhere"));
    /// # }
    /// ```
    pub fn denormalize_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match self.preferred_candidate(path, &Root::for_path(path)) {
            Ok(found) => found.unwrap_or_else(|| path.to_path_buf()),
            Err(e) => {
                log::debug!("leaving {} unchanged: {e}", path.display());
                path.to_path_buf()
            }
        }
    }

    /// Like [`denormalize_path`](Self::denormalize_path) but with an explicit
    /// root, failing when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] if no entry matches `path` under any
    /// casing, or the errors of
    /// [`equivalent_path_candidates`](Self::equivalent_path_candidates).
    pub fn to_existing_cased_path(&self, path: impl AsRef<Path>, root: &Root) -> Result<PathBuf> {
        let path = path.as_ref();
        self.preferred_candidate(path, root)?
            .ok_or_else(|| Error::PathNotFound {
                path: path.to_path_buf(),
            })
    }

    /// The candidate spelled exactly like `path` if it exists, otherwise the
    /// smallest one.
    fn preferred_candidate(&self, path: &Path, root: &Root) -> Result<Option<PathBuf>> {
        let mut found = self.equivalent_path_candidates(path, root)?;
        let exact = segments(path)?
            .into_iter()
            .fold(root.resolve(path)?, |acc, name| acc.join(name));
        Ok(found.take(&exact).or_else(|| found.into_iter().next()))
    }

    /// Whether any entry matches `path` under some casing.
    ///
    /// # Errors
    ///
    /// Same as [`equivalent_path_candidates`](Self::equivalent_path_candidates).
    pub fn normalized_path_exists(&self, path: impl AsRef<Path>, root: &Root) -> Result<bool> {
        Ok(!self.equivalent_path_candidates(path, root)?.is_empty())
    }
}

/// [`CaseResolver::equivalent_path_candidates`] on the real filesystem.
///
/// # Errors
///
/// See [`CaseResolver::equivalent_path_candidates`].
pub fn equivalent_path_candidates(
    path: impl AsRef<Path>,
    root: &Root,
) -> Result<BTreeSet<PathBuf>> {
    CaseResolver::new().equivalent_path_candidates(path, root)
}

/// [`CaseResolver::denormalize_path`] on the real filesystem.
pub fn denormalize_path(path: impl AsRef<Path>) -> PathBuf {
    CaseResolver::new().denormalize_path(path)
}

/// [`CaseResolver::to_existing_cased_path`] on the real filesystem.
///
/// # Errors
///
/// See [`CaseResolver::to_existing_cased_path`].
pub fn to_existing_cased_path(path: impl AsRef<Path>, root: &Root) -> Result<PathBuf> {
    CaseResolver::new().to_existing_cased_path(path, root)
}

/// [`CaseResolver::normalized_path_exists`] on the real filesystem.
///
/// # Errors
///
/// See [`CaseResolver::normalized_path_exists`].
pub fn normalized_path_exists(path: impl AsRef<Path>, root: &Root) -> Result<bool> {
    CaseResolver::new().normalized_path_exists(path, root)
}
