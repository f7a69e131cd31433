//! Integration tests for global flags, configuration, and exit codes.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (a negative answer from an assertion command)
//! - 2: Usage error reported by clap
//! - 4: Invalid arguments
//! - 7: Configuration error

mod common;

use common::{shown, stdout_lines, TestEnv};
use predicates::prelude::*;

#[test]
fn test_root_from_environment() {
    let env = TestEnv::new();
    let file = env.file("Docs/A.txt");

    let lines = stdout_lines(
        env.command_bare()
            .env("FOLDPATH_ROOT", &env.tree)
            .args(["candidates", "/docs/a.TXT"]),
    );
    assert_eq!(lines, vec![shown(&file)]);
}

#[test]
fn test_relative_root_flag_is_anchored_at_working_dir() {
    let env = TestEnv::new();
    let file = env.file("Sync/Docs/A.txt");

    let lines = stdout_lines(env.command_bare().args(["--root", "Sync", "candidates", "docs/a.txt"]));
    assert_eq!(lines, vec![shown(&file)]);
}

#[test]
fn test_output_format_from_config_and_flag() {
    let env = TestEnv::new();
    env.project_config("output_format: json\n");

    env.command_bare()
        .args(["relation", "/a", "/a"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"relation\": \"same\""));

    env.command_bare()
        .args(["--format", "text", "relation", "/a", "/a"])
        .assert()
        .success()
        .stdout("/a and /a are the same path\n");
}

#[test]
fn test_output_format_from_environment() {
    let env = TestEnv::new();
    env.command_bare()
        .env("FOLDPATH_OUTPUT_FORMAT", "json")
        .args(["exists", "/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"exists\": true"));
}

#[test]
fn test_invalid_config_exits_7() {
    let env = TestEnv::new();
    env.user_config("conflict_suffix: \"bad/suffix\"\n");

    env.command_bare()
        .args(["relation", "/a", "/b"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key_exits_7() {
    let env = TestEnv::new();
    env.project_config("data_dir: /tmp\n");

    env.command_bare()
        .args(["relation", "/a", "/b"])
        .assert()
        .code(7);
}

#[test]
fn test_parent_segments_are_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["candidates", "a/../b"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_bad_format_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["--format", "xml", "relation", "/a", "/b"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let env = TestEnv::new();
    let file = env.file("Logs/Today.log");

    let output = env
        .command()
        .args(["--verbose", "candidates", "logs/today.log"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap().trim(),
        shown(&file)
    );
    assert!(String::from_utf8(output.stderr).unwrap().contains("DEBUG"));
}

#[test]
fn test_version_and_help() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("foldpath"));
    env.command_bare()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("candidates"));
}
