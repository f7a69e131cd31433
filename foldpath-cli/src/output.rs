//! Rendering command results as text or JSON.

use crate::error::CliError;
use foldpath::OutputFormat;
use serde::Serialize;
use std::path::Path;

/// A command result that can be printed in every output format.
pub trait Report: Serialize {
    /// Plain-text rendering; an empty string prints nothing.
    fn render_text(&self) -> String;
}

/// Render `report` in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render<R: Report>(format: OutputFormat, report: &R) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(report.render_text()),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| CliError::Io(std::io::Error::from(e))),
    }
}

/// Print `report` to stdout in `format`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn emit<R: Report>(format: OutputFormat, report: &R) -> Result<(), CliError> {
    let out = render(format, report)?;
    if !out.is_empty() {
        println!("{out}");
    }
    Ok(())
}

/// Display form of a path for reports.
pub fn display(path: &Path) -> String {
    path.display().to_string()
}

/// A list of paths, one per line in text mode.
#[derive(Debug, Serialize)]
pub struct PathList {
    /// The path that was looked up.
    pub query: String,
    /// Matching paths.
    pub paths: Vec<String>,
}

impl Report for PathList {
    fn render_text(&self) -> String {
        self.paths.join("\n")
    }
}
