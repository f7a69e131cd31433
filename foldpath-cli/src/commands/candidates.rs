//! Command to list every on-disk path matching a path under any casing.

use crate::error::CliError;
use crate::output::{display, emit, PathList};
use crate::utils::{load_configuration, resolution_root, GlobalOptions};
use clap::Args;
use foldpath::CaseResolver;
use std::path::PathBuf;

/// List all existing paths that match PATH case-insensitively.
#[derive(Args)]
pub struct CandidatesCommand {
    /// Path to look up, in any casing
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

impl CandidatesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolution_root(&config, &self.path);

        let found = CaseResolver::new().equivalent_path_candidates(&self.path, &root)?;
        log::debug!("{} candidate(s) for {}", found.len(), self.path.display());

        let report = PathList {
            query: display(&self.path),
            paths: found.iter().map(|p| display(p)).collect(),
        };
        emit(config.output_format(), &report)
    }
}
