//! Command to assert that one path lies strictly inside another.

use crate::error::CliError;
use crate::output::{emit, Report};
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use foldpath::{fold_case, is_child, is_equal_or_child};
use serde::Serialize;

/// Succeed if PATH is strictly inside PARENT.
///
/// The comparison is textual; neither path has to exist.
#[derive(Args)]
pub struct IsChildCommand {
    /// Candidate child path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Candidate parent path
    #[arg(value_name = "PARENT")]
    pub parent: String,

    /// Also succeed when both paths are the same
    #[arg(long)]
    pub or_equal: bool,

    /// Compare the case-folded forms of both paths
    #[arg(long)]
    pub ignore_case: bool,
}

#[derive(Debug, Serialize)]
struct ChildCheck<'a> {
    path: &'a str,
    parent: &'a str,
    is_child: bool,
}

impl Report for ChildCheck<'_> {
    fn render_text(&self) -> String {
        self.is_child.to_string()
    }
}

impl IsChildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let (path, parent) = if self.ignore_case {
            (fold_case(&self.path), fold_case(&self.parent))
        } else {
            (self.path.clone(), self.parent.clone())
        };
        let answer = if self.or_equal {
            is_equal_or_child(&path, &parent)?
        } else {
            is_child(&path, &parent)?
        };

        if !global.quiet {
            let report = ChildCheck {
                path: &self.path,
                parent: &self.parent,
                is_child: answer,
            };
            emit(config.output_format(), &report)?;
        }

        if answer {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "Assertion failed: {} is not inside {}",
                self.path, self.parent
            )))
        }
    }
}
