//! Resolution roots and input path splitting.
//!
//! A resolution always starts from an explicit [`Root`]. The input path is
//! treated as relative to that root: any leading separator, drive prefix, `.`
//! or repeated separator is dropped before the remaining names are matched
//! one segment at a time.

use std::env;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// The directory a resolution starts from.
///
/// There is no implicit default: call sites pick the root that
/// matches what the path is relative to.
///
/// - [`Root::Filesystem`] for absolute paths, e.g. `/usr/local/share`.
/// - [`Root::Dir`] for paths relative to a known base such as a sync root.
/// - [`Root::CurrentDir`] for paths typed relative to the working directory.
///
/// # Examples
///
/// ```
/// use foldpath::path::Root;
/// use std::path::Path;
///
/// assert_eq!(Root::for_path(Path::new("/etc/hosts")), Root::Filesystem);
/// assert_eq!(Root::for_path(Path::new("notes.txt")), Root::CurrentDir);
/// assert_eq!(Root::dir("/srv/sync"), Root::Dir("/srv/sync".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Root {
    /// The filesystem root of the input path (`/`, or the drive root).
    Filesystem,
    /// The process working directory.
    CurrentDir,
    /// An explicit base directory. `~` is expanded and relative bases are
    /// taken relative to the working directory.
    Dir(PathBuf),
}

impl Root {
    /// Root at an explicit base directory.
    #[must_use]
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self::Dir(path.into())
    }

    /// The conventional root for a path given on its own: the filesystem root
    /// for absolute paths, the working directory otherwise.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        if path.has_root() {
            Self::Filesystem
        } else {
            Self::CurrentDir
        }
    }

    /// Resolve this root to an absolute directory for resolving `path`.
    ///
    /// The root is not required to exist; a missing root simply yields no
    /// candidates.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or home directory cannot be
    /// determined, or if an explicit base escapes the filesystem root through
    /// `..` components.
    pub fn resolve(&self, path: &Path) -> Result<PathBuf> {
        match self {
            Self::Filesystem => filesystem_root(path),
            Self::CurrentDir => current_dir(path),
            Self::Dir(base) => absolutize(base),
        }
    }
}

fn current_dir(context: &Path) -> Result<PathBuf> {
    env::current_dir().map_err(|e| Error::InvalidPath {
        path: context.to_path_buf(),
        reason: format!("cannot determine current directory: {e}"),
    })
}

fn filesystem_root(path: &Path) -> Result<PathBuf> {
    let anchor: PathBuf = path
        .components()
        .take_while(|c| matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();
    if anchor.has_root() {
        return Ok(anchor);
    }

    let cwd = current_dir(path)?;
    Ok(cwd.ancestors().last().map_or(cwd.clone(), Path::to_path_buf))
}

/// Make a base directory absolute without touching the filesystem.
///
/// Expands a leading `~`, joins relative bases onto the working directory and
/// folds `.` and `..` lexically.
///
/// # Errors
///
/// Returns an error for `~user` syntax, when the home or working directory is
/// unavailable, or when `..` would climb above the filesystem root.
///
/// # Examples
///
/// ```
/// use foldpath::path::root::absolutize;
/// use std::path::{Path, PathBuf};
///
/// # #[cfg(unix)]
/// assert_eq!(absolutize(Path::new("/srv/./sync/../data")).unwrap(), PathBuf::from("/srv/data"));
/// assert!(absolutize(Path::new("relative")).unwrap().is_absolute());
/// ```
pub fn absolutize(base: &Path) -> Result<PathBuf> {
    let expanded = expand_home(base)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        current_dir(base)?.join(expanded)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !resolved.pop() || !resolved.has_root() {
                    return Err(Error::InvalidPath {
                        path: base.to_path_buf(),
                        reason: "too many '..' components (escapes root)".to_string(),
                    });
                }
            }
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    let mut components = path.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "cannot determine home directory".to_string(),
            })?;
            Ok(home.join(components.as_path()))
        }
        Some(Component::Normal(first)) if first.to_string_lossy().starts_with('~') => {
            Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
            })
        }
        _ => Ok(path.to_path_buf()),
    }
}

/// Split an input path into the names to match below the root.
///
/// Root and prefix components, `.` and empty segments are dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path contains `..`: parent
/// references would make a candidate escape its own branch.
///
/// # Examples
///
/// ```
/// use foldpath::path::root::segments;
/// use std::path::Path;
///
/// let parts = segments(Path::new("//Usr/./Local/")).unwrap();
/// assert_eq!(parts, vec!["Usr", "Local"]);
/// assert!(segments(Path::new("/usr/../etc")).is_err());
/// ```
pub fn segments(path: &Path) -> Result<Vec<OsString>> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(Ok(name.to_os_string())),
            Component::ParentDir => Some(Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "'..' components cannot be resolved case-insensitively".to_string(),
            })),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
        })
        .collect()
}
