#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # foldpath
//!
//! Case-folding path resolution for syncing case-insensitive remote trees
//! onto local filesystems.
//!
//! A remote path such as `/Photos/summer` may be stored locally as
//! `/photos/Summer`, or, on a case-sensitive filesystem, as several siblings
//! that differ only by case. This library finds the real entries, checks
//! whether a filesystem folds case, and provides the textual path checks a
//! sync engine needs.
//!
//! ## Core Types
//!
//! - [`CaseResolver`] and [`Root`]: segment-wise case-insensitive resolution
//! - [`DirectoryLister`]: the directory-listing seam, with [`FsLister`] and
//!   [`MemoryLister`]
//! - [`CaseProbe`]: filesystem case-sensitivity detection
//! - [`PathRelationship`]: ancestor/descendant classification
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use foldpath::{CaseResolver, MemoryLister, Root};
//! use std::path::PathBuf;
//!
//! let mut tree = MemoryLister::new();
//! tree.add_file("/sync/Photos/Summer.jpg");
//! let resolver = CaseResolver::with_lister(tree);
//!
//! # #[cfg(unix)]
//! assert_eq!(
//!     resolver.to_existing_cased_path("photos/SUMMER.JPG", &Root::dir("/sync")).unwrap(),
//!     PathBuf::from("/sync/Photos/Summer.jpg")
//! );
//! assert!(foldpath::is_child("/sync/Photos", "/sync").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    complete, conflict_free_name, denormalize_path, equivalent_path_candidates, fold_case,
    is_child, is_equal_or_child, is_fs_case_sensitive, normalized_path_exists,
    to_existing_cased_path, CaseProbe, CaseResolver, DirectoryLister, FsLister, MemoryLister,
    PathRelationship, Root,
};
