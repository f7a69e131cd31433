//! Command to detect whether a directory's filesystem is case-sensitive.

use crate::error::CliError;
use crate::output::{display, emit, Report};
use crate::utils::{dir_or_cwd, load_configuration, GlobalOptions};
use clap::Args;
use foldpath::CaseProbe;
use serde::Serialize;
use std::path::PathBuf;

/// Probe whether the filesystem holding DIR is case-sensitive.
#[derive(Args)]
pub struct ProbeCommand {
    /// Directory to probe (defaults to the current directory)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Fail instead of falling back to a read-only check when DIR is not writable
    #[arg(long)]
    pub no_fallback: bool,
}

#[derive(Debug, Serialize)]
struct ProbeResult {
    directory: String,
    case_sensitive: bool,
}

impl Report for ProbeResult {
    fn render_text(&self) -> String {
        if self.case_sensitive {
            "case-sensitive".to_string()
        } else {
            "case-insensitive".to_string()
        }
    }
}

impl ProbeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let dir = dir_or_cwd(self.dir)?;

        let fallback = config.probe_fallback() && !self.no_fallback;
        let case_sensitive = CaseProbe::new().with_fallback(fallback).run(&dir)?;

        let report = ProbeResult {
            directory: display(&dir),
            case_sensitive,
        };
        emit(config.output_format(), &report)
    }
}
