//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own home and working directory
//! - Command builders that ignore the caller's configuration
//! - Fixture helpers for building directory trees

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak the caller's configuration.
const CONFIG_VARS: [&str; 5] = [
    "FOLDPATH_ROOT",
    "FOLDPATH_CONFLICT_SUFFIX",
    "FOLDPATH_PROBE_FALLBACK",
    "FOLDPATH_OUTPUT_FORMAT",
    "FOLDPATH_LOG_MODE",
];

/// Test environment with an isolated home and working directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Fake home directory holding `.foldpath/config.yaml`
    pub home: PathBuf,
    /// Directory trees under test live here
    pub tree: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        let tree = temp_path.join("tree");
        fs::create_dir_all(&home).expect("Failed to create home");
        fs::create_dir_all(&tree).expect("Failed to create tree");

        Self {
            temp_dir,
            temp_path,
            home,
            tree,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The command runs in the tree directory with the fake home and none
    /// of the `FOLDPATH_*` variables set.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("foldpath").expect("Failed to find foldpath binary");
        cmd.current_dir(&self.tree).env("HOME", &self.home);
        for var in CONFIG_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--root` set to the tree directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(&self.tree);
        cmd
    }

    /// Path of `rel` under the tree directory.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.tree.join(rel)
    }

    /// Create a file (and its parents) under the tree directory.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent");
        }
        fs::write(&path, b"").expect("Failed to create file");
        path
    }

    /// Create a directory (and its parents) under the tree directory.
    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Write the user configuration file.
    pub fn user_config(&self, yaml: &str) {
        let dir = self.home.join(".foldpath");
        fs::create_dir_all(&dir).expect("Failed to create config dir");
        fs::write(dir.join("config.yaml"), yaml).expect("Failed to write config");
    }

    /// Write a project configuration file in the tree directory.
    pub fn project_config(&self, yaml: &str) {
        fs::write(self.tree.join("foldpath.yaml"), yaml).expect("Failed to write config");
    }

    /// Whether the tree directory distinguishes names by case.
    pub fn case_sensitive(&self) -> bool {
        foldpath::is_fs_case_sensitive(&self.tree).expect("Failed to probe tree")
    }
}

/// Run a command and return its trimmed stdout lines.
#[allow(dead_code)]
pub fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().expect("Failed to run command");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout)
        .expect("Invalid UTF-8 in output")
        .lines()
        .map(str::to_string)
        .collect()
}

/// Display form of a path, as the CLI prints it.
#[allow(dead_code)]
pub fn shown(path: &Path) -> String {
    path.display().to_string()
}
