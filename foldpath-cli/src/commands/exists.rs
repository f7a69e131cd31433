//! Command to assert that a path exists under some casing.

use crate::error::CliError;
use crate::output::{display, emit, Report};
use crate::utils::{load_configuration, resolution_root, GlobalOptions};
use clap::Args;
use foldpath::CaseResolver;
use serde::Serialize;
use std::path::PathBuf;

/// Succeed if PATH exists under any casing.
#[derive(Args)]
pub struct ExistsCommand {
    /// Path to check, in any casing
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Invert the assertion (fail if the path exists)
    #[arg(long)]
    pub not: bool,
}

#[derive(Debug, Serialize)]
struct Existence {
    path: String,
    exists: bool,
}

impl Report for Existence {
    fn render_text(&self) -> String {
        self.exists.to_string()
    }
}

impl ExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolution_root(&config, &self.path);

        let exists = CaseResolver::new().normalized_path_exists(&self.path, &root)?;
        if !global.quiet {
            let report = Existence {
                path: display(&self.path),
                exists,
            };
            emit(config.output_format(), &report)?;
        }

        if exists != self.not {
            Ok(())
        } else if self.not {
            Err(CliError::SemanticFailure(format!(
                "Assertion failed: {} exists",
                self.path.display()
            )))
        } else {
            Err(CliError::SemanticFailure(format!(
                "Assertion failed: {} does not exist under any casing",
                self.path.display()
            )))
        }
    }
}
