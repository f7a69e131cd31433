//! Build script for foldpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("foldpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve paths case-insensitively against the local filesystem")
        .long_about(
            "Find the on-disk spellings of paths from case-insensitive sources, \
             detect case-sensitive filesystems, and pick conflict-free names",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .help("Resolve paths relative to this directory")
                .value_name("PATH")
                .global(true)
                .env("FOLDPATH_ROOT"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (text or json)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("candidates")
                .about("List every existing path matching PATH under any casing")
                .long_about("Resolve a path segment by segment and print every on-disk match"),
            Command::new("denormalize")
                .about("Print a path with its on-disk casing")
                .long_about("Recover the real casing of a path, or echo it when nothing matches"),
            Command::new("exists")
                .about("Assert that a path exists under some casing")
                .long_about("Exit with status 1 when no casing of the path exists"),
            Command::new("probe")
                .about("Detect whether a directory's filesystem is case-sensitive")
                .long_about("Create a temporary marker file and look it up under swapped case"),
            Command::new("is-child")
                .about("Assert that a path lies inside another")
                .long_about("Textual, separator-aware descendant check"),
            Command::new("relation")
                .about("Describe how two paths relate")
                .long_about("Classify two paths as ancestor, descendant, same, or unrelated"),
            Command::new("conflict-name")
                .about("Pick a name that does not collide with siblings under case folding")
                .long_about("Insert a conflict suffix before the extension until the name is free"),
            Command::new("complete")
                .about("Complete a partially typed path, ignoring case")
                .long_about("List entries whose names start with the typed prefix under any casing"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("foldpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
