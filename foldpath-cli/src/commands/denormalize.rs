//! Command to recover the on-disk casing of a path.

use crate::error::CliError;
use crate::output::{display, emit, Report};
use crate::utils::{load_configuration, resolution_root, GlobalOptions};
use clap::Args;
use foldpath::CaseResolver;
use serde::Serialize;
use std::path::PathBuf;

/// Print PATH with the casing it has on disk.
///
/// Without `--strict`, a path with no match is printed unchanged.
#[derive(Args)]
pub struct DenormalizeCommand {
    /// Path to denormalize, in any casing
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Fail instead of echoing the input when nothing matches
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Serialize)]
struct Denormalized {
    input: String,
    path: String,
    found: bool,
}

impl Report for Denormalized {
    fn render_text(&self) -> String {
        self.path.clone()
    }
}

impl DenormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let root = resolution_root(&config, &self.path);

        // `found` comes from the candidate set; the input may still stat even
        // when no listing reached it.
        let (path, found) = match CaseResolver::new().to_existing_cased_path(&self.path, &root) {
            Ok(path) => (path, true),
            Err(e) if e.is_not_found() && !self.strict => (self.path.clone(), false),
            Err(e) => return Err(e.into()),
        };

        let report = Denormalized {
            input: display(&self.path),
            path: display(&path),
            found,
        };
        emit(config.output_format(), &report)
    }
}
