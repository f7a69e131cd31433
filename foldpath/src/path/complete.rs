//! Case-insensitive completion of partially typed paths.

use std::collections::BTreeSet;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR};

use crate::error::Result;
use crate::path::candidates::CaseResolver;
use crate::path::fold::fold_case;
use crate::path::lister::DirectoryLister;
use crate::path::root::Root;

impl<L: DirectoryLister> CaseResolver<L> {
    /// Complete `partial` against the entries below `root`.
    ///
    /// Everything up to the last separator is resolved case-insensitively.
    /// Every child of every matching directory whose folded name starts with
    /// the folded final segment is returned. A trailing separator (or an empty
    /// `partial`) lists all children. Results are sorted and unique.
    ///
    /// # Errors
    ///
    /// Returns the errors of
    /// [`equivalent_path_candidates`](Self::equivalent_path_candidates) for the
    /// directory part of `partial`.
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::{CaseResolver, MemoryLister, Root};
    /// use std::path::PathBuf;
    ///
    /// let mut tree = MemoryLister::new();
    /// tree.add_file("/sync/Photos/Summer.jpg");
    /// tree.add_file("/sync/photos/spring.jpg");
    /// tree.add_file("/sync/Photos/winter.jpg");
    /// let resolver = CaseResolver::with_lister(tree);
    ///
    /// # #[cfg(unix)]
    /// assert_eq!(
    ///     resolver.complete("PHOTOS/s", &Root::dir("/sync")).unwrap(),
    ///     vec![
    ///         PathBuf::from("/sync/Photos/Summer.jpg"),
    ///         PathBuf::from("/sync/photos/spring.jpg"),
    ///     ]
    /// );
    /// ```
    pub fn complete(&self, partial: &str, root: &Root) -> Result<Vec<PathBuf>> {
        let (parent, prefix) = match partial.rfind(is_separator) {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };
        let wanted = fold_case(prefix);

        let mut matches = BTreeSet::new();
        for dir in self.equivalent_path_candidates(Path::new(parent), root)? {
            let children = match self.lister().list(&dir) {
                Ok(children) => children,
                Err(e) => {
                    log::debug!("cannot complete inside {}: {e}", dir.display());
                    continue;
                }
            };
            matches.extend(
                children
                    .into_iter()
                    .filter(|child| fold_case(&child.to_string_lossy()).starts_with(&wanted))
                    .map(|child| dir.join(child)),
            );
        }
        Ok(matches.into_iter().collect())
    }

    /// [`complete`](Self::complete) rendered for a shell: directories end
    /// with a separator so the next segment can be typed straight away.
    ///
    /// # Errors
    ///
    /// Same as [`complete`](Self::complete).
    ///
    /// # Examples
    ///
    /// ```
    /// use foldpath::path::{CaseResolver, MemoryLister, Root};
    ///
    /// let mut tree = MemoryLister::new();
    /// tree.add_dir("/sync/Photos").add_file("/sync/photo.jpg");
    /// let resolver = CaseResolver::with_lister(tree);
    ///
    /// # #[cfg(unix)]
    /// assert_eq!(
    ///     resolver.complete_display("PHOTO", &Root::dir("/sync")).unwrap(),
    ///     vec!["/sync/Photos/", "/sync/photo.jpg"]
    /// );
    /// ```
    pub fn complete_display(&self, partial: &str, root: &Root) -> Result<Vec<String>> {
        Ok(self
            .complete(partial, root)?
            .into_iter()
            .map(|path| {
                if self.lister().is_dir(&path) {
                    format!("{}{MAIN_SEPARATOR}", path.display())
                } else {
                    path.display().to_string()
                }
            })
            .collect())
    }
}

/// Complete `partial` on the real filesystem.
///
/// # Errors
///
/// See [`CaseResolver::complete`].
pub fn complete(partial: &str, root: &Root) -> Result<Vec<PathBuf>> {
    CaseResolver::new().complete(partial, root)
}
