//! Common test utilities for integration tests.
//!
//! This module provides a fixture builder for on-disk directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for on-disk directory trees rooted in a temporary directory.
///
/// The directory is removed when the fixture is dropped.
pub struct TreeFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Root of the fixture.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of `relative` inside the fixture.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Creates a file (and its parents) with some content.
    pub fn file(self, relative: &str) -> Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, relative).unwrap();
        self
    }

    /// Creates a directory (and its parents).
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Whether the fixture lives on a case-sensitive filesystem.
    pub fn case_sensitive(&self) -> bool {
        foldpath::is_fs_case_sensitive(self.root()).unwrap()
    }
}
