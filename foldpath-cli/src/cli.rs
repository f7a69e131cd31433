//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CandidatesCommand, CompleteCommand, CompletionsCommand, ConflictNameCommand,
    DenormalizeCommand, ExistsCommand, IsChildCommand, ProbeCommand, RelationCommand,
};
use clap::{Parser, Subcommand};
use foldpath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for resolving paths case-insensitively.
#[derive(Parser)]
#[command(name = "foldpath")]
#[command(
    version,
    about = "Resolve paths case-insensitively against the local filesystem",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Resolve paths relative to this directory
    #[arg(long, value_name = "PATH", global = true, env = "FOLDPATH_ROOT")]
    pub root: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// List every existing path matching PATH under any casing
    Candidates(CandidatesCommand),

    /// Print a path with its on-disk casing
    Denormalize(DenormalizeCommand),

    /// Assert that a path exists under some casing
    Exists(ExistsCommand),

    /// Detect whether a directory's filesystem is case-sensitive
    Probe(ProbeCommand),

    /// Assert that a path lies inside another
    IsChild(IsChildCommand),

    /// Describe how two paths relate
    Relation(RelationCommand),

    /// Pick a name that does not collide with siblings under case folding
    ConflictName(ConflictNameCommand),

    /// Complete a partially typed path, ignoring case
    Complete(CompleteCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "foldpath",
            "candidates",
            "a/b",
            "--root",
            "/sync",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/sync")));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Candidates(_)));
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(Cli::try_parse_from(["foldpath", "--format", "xml", "probe"]).is_err());
    }
}
