//! Directory listing, the only filesystem read the resolver performs.
//!
//! Resolution is written against the [`DirectoryLister`] trait so it can run
//! over an in-memory tree in tests. [`FsLister`] is the real implementation;
//! [`MemoryLister`] is a small case-sensitive in-memory tree.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Lists the immediate children of a directory.
///
/// Implementations return bare entry names, not full paths. Any error
/// (missing directory, not a directory, permission denied) is reported as an
/// `io::Error`; the resolver treats all of them as a dead branch.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryLister {
    /// List the names of the entries directly inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be read as a directory.
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>>;

    /// Whether `path` names an existing entry of any kind.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` names an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Lists directories on the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(dir)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// An in-memory, case-sensitive directory tree.
///
/// Paths are absolute; intermediate directories are created implicitly.
/// Directories can be marked unreadable to exercise permission failures.
///
/// # Examples
///
/// ```
/// use foldpath::path::{DirectoryLister, MemoryLister};
/// use std::path::Path;
///
/// let mut tree = MemoryLister::new();
/// tree.add_file("/sync/Test Folder/File.txt");
/// tree.add_file("/sync/test folder/File.txt");
///
/// let mut names = tree.list(Path::new("/sync")).unwrap();
/// names.sort();
/// assert_eq!(names, vec!["Test Folder", "test folder"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryLister {
    dirs: BTreeMap<PathBuf, BTreeSet<OsString>>,
    files: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
}

impl MemoryLister {
    /// Create a tree containing only the root directory.
    #[must_use]
    pub fn new() -> Self {
        let mut tree = Self::default();
        tree.dirs.insert(PathBuf::from("/"), BTreeSet::new());
        tree
    }

    /// Add a directory and all of its ancestors.
    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = Self::key(path.as_ref());
        self.dirs.entry(path.clone()).or_default();
        self.link_to_parents(&path);
        self
    }

    /// Add a file and all of its ancestor directories.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = Self::key(path.as_ref());
        self.link_to_parents(&path);
        self.files.insert(path);
        self
    }

    /// Make listing `path` fail with `PermissionDenied`.
    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.unreadable.insert(Self::key(path.as_ref()));
        self
    }

    fn link_to_parents(&mut self, path: &Path) {
        let mut child = path;
        while let (Some(parent), Some(name)) = (child.parent(), child.file_name()) {
            self.dirs
                .entry(parent.to_path_buf())
                .or_default()
                .insert(name.to_os_string());
            child = parent;
        }
    }

    fn key(path: &Path) -> PathBuf {
        // Normalizes trailing separators and repeated separators.
        path.components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }
}

impl DirectoryLister for MemoryLister {
    fn list(&self, dir: &Path) -> io::Result<Vec<OsString>> {
        let key = Self::key(dir);
        if self.unreadable.contains(&key) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", key.display()),
            ));
        }
        match self.dirs.get(&key) {
            Some(children) => Ok(children.iter().cloned().collect()),
            None if self.files.contains(&key) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is not a directory", key.display()),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", key.display()),
            )),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let key = Self::key(path);
        self.dirs.contains_key(&key) || self.files.contains(&key)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains_key(&Self::key(path))
    }
}
