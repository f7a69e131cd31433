//! Command to describe how two paths relate.

use crate::error::CliError;
use crate::output::{emit, Report};
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use foldpath::PathRelationship;
use serde::Serialize;

/// Describe whether FIRST is an ancestor, descendant, or sibling of SECOND.
#[derive(Args)]
pub struct RelationCommand {
    /// First path
    #[arg(value_name = "FIRST")]
    pub first: String,

    /// Second path
    #[arg(value_name = "SECOND")]
    pub second: String,
}

#[derive(Debug, Serialize)]
struct Relation {
    first: String,
    second: String,
    relation: String,
    #[serde(skip)]
    description: String,
}

impl Report for Relation {
    fn render_text(&self) -> String {
        self.description.clone()
    }
}

impl RelationCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let relation = PathRelationship::between(&self.first, &self.second)?;

        let report = Relation {
            relation: relation.to_string(),
            description: relation.description(&self.first, &self.second),
            first: self.first,
            second: self.second,
        };
        emit(config.output_format(), &report)
    }
}
