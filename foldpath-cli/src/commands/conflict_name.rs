//! Command to pick a name that does not collide under case folding.

use crate::error::CliError;
use crate::output::{display, emit, Report};
use crate::utils::{load_configuration, resolution_root, GlobalOptions};
use clap::Args;
use foldpath::CaseResolver;
use serde::Serialize;
use std::path::PathBuf;

/// Print PATH, or a renamed variant of it when PATH clashes under case
/// folding with an existing entry.
#[derive(Args)]
pub struct ConflictNameCommand {
    /// Desired path
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Label inserted before the extension (overrides configuration)
    #[arg(long, value_name = "SUFFIX")]
    pub suffix: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConflictName {
    requested: String,
    path: String,
    renamed: bool,
}

impl Report for ConflictName {
    fn render_text(&self) -> String {
        self.path.clone()
    }
}

impl ConflictNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let suffix = self
            .suffix
            .as_deref()
            .unwrap_or_else(|| config.conflict_suffix());

        let root = resolution_root(&config, &self.path);
        let resolver = CaseResolver::new();
        let renamed = resolver.conflict_free_name(&self.path, &root, suffix)?;
        let taken = resolver.normalized_path_exists(&self.path, &root)?;
        let free = if taken { renamed } else { self.path.clone() };

        let report = ConflictName {
            requested: display(&self.path),
            renamed: free != self.path,
            path: display(&free),
        };
        emit(config.output_format(), &report)
    }
}
