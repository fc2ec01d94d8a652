//! Diff output formatter for showing changes
//!
//! Emits one `@@` hunk per changed block of lines.

use crate::domain::{UpdateSummary, UpdatedFile};
use crate::output::OutputFormatter;
use colored::Colorize;
use std::io::Write;

/// Diff formatter for showing manifest changes
pub struct DiffFormatter {
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl DiffFormatter {
    /// Create a new diff formatter with color option
    pub fn with_color(dry_run: bool, color: bool) -> Self {
        Self { dry_run, color }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> &'static str {
        if self.dry_run {
            "(dry-run) "
        } else {
            ""
        }
    }

    fn removed(&self, line: &str) -> String {
        let text = format!("-{}", line);
        if self.color {
            text.red().to_string()
        } else {
            text
        }
    }

    fn added(&self, line: &str) -> String {
        let text = format!("+{}", line);
        if self.color {
            text.green().to_string()
        } else {
            text
        }
    }
}

impl OutputFormatter for DiffFormatter {
    fn format(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        for file in &summary.files {
            self.format_file(file, writer)?;
            writeln!(writer)?;
        }

        let verb = if self.dry_run {
            "would be updated"
        } else {
            "updated"
        };
        writeln!(
            writer,
            "{}# {} file(s) {}",
            self.dry_run_prefix(),
            summary.file_count(),
            verb
        )?;

        Ok(())
    }

    fn format_file(&self, file: &UpdatedFile, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        writeln!(writer, "{}--- a/{}", prefix, file.original.name)?;
        writeln!(writer, "{}+++ b/{}", prefix, file.updated.name)?;

        for change in file.changed_lines() {
            writeln!(
                writer,
                "@@ -{},{} +{},{} @@",
                change.line,
                change.old.len(),
                change.line,
                change.new.len()
            )?;
            for old in &change.old {
                writeln!(writer, "{}", self.removed(old))?;
            }
            for new in &change.new {
                writeln!(writer, "{}", self.added(new))?;
            }
        }

        Ok(())
    }
}
