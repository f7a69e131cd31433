//! Command to complete a partially typed path case-insensitively.

use crate::error::CliError;
use crate::output::{emit, PathList};
use crate::utils::{load_configuration, resolution_root, GlobalOptions};
use clap::Args;
use foldpath::CaseResolver;
use std::path::Path;

/// List existing paths that PARTIAL could complete to, ignoring case.
///
/// Directories are printed with a trailing separator.
#[derive(Args)]
pub struct CompleteCommand {
    /// Partially typed path
    #[arg(value_name = "PARTIAL")]
    pub partial: String,
}

impl CompleteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolution_root(&config, Path::new(&self.partial));

        let paths = CaseResolver::new().complete_display(&self.partial, &root)?;
        let report = PathList {
            query: self.partial,
            paths,
        };
        emit(config.output_format(), &report)
    }
}
