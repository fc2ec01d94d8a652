//! JSON output formatter for machine processing
//!
//! The `files` array carries the full updated content of every changed
//! manifest, which is what a downstream change-proposal step consumes.

use crate::domain::{UpdateSummary, UpdatedFile};
use crate::output::{OutputFormatter, Verbosity};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Whether this was a dry-run
    dry_run: bool,
    /// Changed files
    files: Vec<JsonFile<'a>>,
    /// Requested dependencies (verbose mode only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dependencies: Vec<JsonDependency<'a>>,
}

/// JSON representation of a changed file
#[derive(Serialize)]
struct JsonFile<'a> {
    /// File name
    name: &'a str,
    /// Directory the file lives in
    directory: &'a str,
    /// Updated content
    content: &'a str,
    /// Changed lines
    changes: Vec<JsonChange>,
}

/// JSON representation of one changed block of lines
#[derive(Serialize)]
struct JsonChange {
    /// 1-based number of the first line
    line: usize,
    /// Lines before the update, newline-joined
    from: String,
    /// Lines after the update, newline-joined
    to: String,
}

/// JSON representation of a requested dependency
#[derive(Serialize)]
struct JsonDependency<'a> {
    /// Package name
    name: &'a str,
    /// Old version
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    /// New version
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<&'a str>,
}

impl JsonFormatter {
    fn file_to_json<'a>(&self, file: &'a UpdatedFile) -> JsonFile<'a> {
        JsonFile {
            name: &file.updated.name,
            directory: &file.updated.directory,
            content: &file.updated.content,
            changes: file
                .changed_lines()
                .into_iter()
                .map(|change| JsonChange {
                    line: change.line,
                    from: change.old.join("\n"),
                    to: change.new.join("\n"),
                })
                .collect(),
        }
    }

    fn to_output<'a>(&self, summary: &'a UpdateSummary) -> JsonOutput<'a> {
        let dependencies = if self.verbosity == Verbosity::Verbose {
            summary
                .dependencies
                .iter()
                .map(|dep| JsonDependency {
                    name: &dep.name,
                    from: dep.previous_version.as_deref(),
                    to: dep.version.as_deref(),
                })
                .collect()
        } else {
            Vec::new()
        };

        JsonOutput {
            dry_run: summary.dry_run,
            files: summary.files.iter().map(|f| self.file_to_json(f)).collect(),
            dependencies,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = self.to_output(summary);
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
        Ok(())
    }

    fn format_file(&self, file: &UpdatedFile, writer: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.file_to_json(file))?;
        writeln!(writer)?;
        Ok(())
    }
}
