//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Per-file listing of rewritten requirement lines with colors
//! - Requested dependency listing in verbose mode
//! - Summary line

use crate::domain::{UpdateSummary, UpdatedFile};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether this is a dry-run
    dry_run: bool,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, dry_run: bool, color: bool) -> Self {
        Self {
            verbosity,
            dry_run,
            color,
        }
    }

    /// Get the dry-run prefix if applicable
    fn dry_run_prefix(&self) -> String {
        if !self.dry_run {
            return String::new();
        }
        if self.color {
            format!("{} ", "(dry-run)".cyan())
        } else {
            "(dry-run) ".to_string()
        }
    }

    fn paint_bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_new(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    fn paint_old(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, summary: &UpdateSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let prefix = self.dry_run_prefix();

        if self.verbosity == Verbosity::Verbose && !summary.dependencies.is_empty() {
            writeln!(writer, "{}:", self.paint_bold("Dependencies"))?;
            for dependency in &summary.dependencies {
                writeln!(writer, "  {}", dependency)?;
            }
            writeln!(writer)?;
        }

        if self.verbosity != Verbosity::Quiet {
            for file in &summary.files {
                self.format_file(file, writer)?;
            }
        }

        let verb = if self.dry_run {
            "would be updated"
        } else {
            "updated"
        };
        writeln!(
            writer,
            "{}{}: {} file(s) {}, {} requirement line(s) changed",
            prefix,
            self.paint_bold("Summary"),
            self.paint_new(&summary.file_count().to_string()),
            verb,
            summary.total_changed_lines()
        )?;

        Ok(())
    }

    fn format_file(&self, file: &UpdatedFile, writer: &mut dyn Write) -> std::io::Result<()> {
        let changes = file.changed_lines();
        writeln!(
            writer,
            "{}{} ({} change(s))",
            self.dry_run_prefix(),
            self.paint_bold(file.name()),
            changes.len()
        )?;

        for change in changes {
            for old in &change.old {
                writeln!(writer, "  {} {}", self.paint_old("was"), old.trim())?;
            }
            for new in &change.new {
                writeln!(writer, "  {} {}", self.paint_new("now"), new.trim())?;
            }
        }
        writeln!(writer)?;

        Ok(())
    }
}
