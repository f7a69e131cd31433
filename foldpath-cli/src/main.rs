//! Main entry point for the foldpath CLI.
//!
//! This is the command-line interface for case-insensitive path resolution.
//! It provides commands for:
//! - `candidates`, `denormalize`, `exists`: resolving paths under any casing
//! - `probe`: detecting case-sensitive filesystems
//! - `is-child`, `relation`: textual path relationships
//! - `conflict-name`, `complete`: naming and completion helpers

use clap::Parser;
use foldpath_cli::cli::{Cli, Command};
use foldpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    foldpath::init_logger(cli.verbose, cli.quiet).install();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        root: cli.root,
        format: cli.format,
    };

    // Execute the command
    let result = match cli.command {
        Command::Candidates(cmd) => cmd.execute(&global),
        Command::Denormalize(cmd) => cmd.execute(&global),
        Command::Exists(cmd) => cmd.execute(&global),
        Command::Probe(cmd) => cmd.execute(&global),
        Command::IsChild(cmd) => cmd.execute(&global),
        Command::Relation(cmd) => cmd.execute(&global),
        Command::ConflictName(cmd) => cmd.execute(&global),
        Command::Complete(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
