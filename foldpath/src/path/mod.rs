//! Case-folding path resolution.
//!
//! A cloud service that compares names case-insensitively can hand out a path
//! whose casing differs from what is stored locally. This module recovers the
//! real on-disk entries for such a path, decides whether a local filesystem
//! folds case at all, and offers the textual checks a sync engine needs around
//! them.
//!
//! # Key Concepts
//!
//! ## Roots
//!
//! Every resolution starts from an explicit [`Root`]. The input path is always
//! read relative to it, so `/test` under `Root::dir("/usr/local/share")` means
//! `/usr/local/share/test`.
//!
//! ## Candidates
//!
//! On a case-sensitive filesystem several siblings may differ only by case.
//! [`equivalent_path_candidates`] returns all of them; [`denormalize_path`]
//! picks one deterministically.
//!
//! ## Listers
//!
//! Directory reads go through [`DirectoryLister`]. [`FsLister`] reads the real
//! filesystem and [`MemoryLister`] is an in-memory tree; [`CaseResolver`] runs
//! over either.
//!
//! # Examples
//!
//! ```no_run
//! use foldpath::path::{denormalize_path, normalized_path_exists, Root};
//!
//! let real = denormalize_path("/USR/LOCAL/SHARE");
//! assert_eq!(real, std::path::Path::new("/usr/local/share"));
//!
//! let missing = normalized_path_exists("/test_folder/path_928", &Root::dir("/usr")).unwrap();
//! assert!(!missing);
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use foldpath::path::{is_child, PathRelationship};
//!
//! assert!(is_child("/parent/path/child", "/parent/path/").unwrap());
//! assert_eq!(
//!     PathRelationship::between("/home/user", "/home/user/project").unwrap(),
//!     PathRelationship::Ancestor
//! );
//! ```

pub mod candidates;
pub mod complete;
pub mod conflict;
pub mod fold;
pub mod lister;
pub mod probe;
pub mod relationship;
pub mod root;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use candidates::{
    denormalize_path, equivalent_path_candidates, normalized_path_exists,
    to_existing_cased_path, CaseResolver,
};
pub use complete::complete;
pub use conflict::{conflict_free_name, DEFAULT_CONFLICT_SUFFIX};
pub use fold::{fold_case, fold_path, names_match};
pub use lister::{DirectoryLister, FsLister, MemoryLister};
pub use probe::{is_fs_case_sensitive, CaseProbe};
pub use relationship::{is_child, is_equal_or_child, PathRelationship};
pub use root::Root;
