//! Update result summary types
//!
//! Pairs each changed manifest with its original so formatters can show
//! what moved.

use super::{Dependency, DependencyFile};
use serde::Serialize;

/// A block of lines that differs between two versions of a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange<'a> {
    /// 1-based number of the first line in the block
    pub line: usize,
    /// Lines before the update
    pub old: Vec<&'a str>,
    /// Lines after the update
    pub new: Vec<&'a str>,
}

/// A manifest that changed, with its content before and after
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdatedFile {
    /// File as supplied to the update
    pub original: DependencyFile,
    /// File as produced by the update
    pub updated: DependencyFile,
}

impl UpdatedFile {
    /// Creates a new UpdatedFile
    pub fn new(original: DependencyFile, updated: DependencyFile) -> Self {
        Self { original, updated }
    }

    /// Returns the file name
    pub fn name(&self) -> &str {
        &self.updated.name
    }

    /// Returns the blocks of lines that differ.
    ///
    /// With equal line counts every differing line is its own block. A
    /// requirement containing a newline changes the line count; the whole
    /// region between the common leading and trailing lines is then reported
    /// as one block.
    pub fn changed_lines(&self) -> Vec<LineChange<'_>> {
        let old: Vec<&str> = self.original.content.lines().collect();
        let new: Vec<&str> = self.updated.content.lines().collect();

        if old.len() == new.len() {
            return old
                .iter()
                .zip(&new)
                .enumerate()
                .filter(|(_, (o, n))| o != n)
                .map(|(i, (o, n))| LineChange {
                    line: i + 1,
                    old: vec![*o],
                    new: vec![*n],
                })
                .collect();
        }

        let head = old
            .iter()
            .zip(&new)
            .take_while(|(o, n)| o == n)
            .count();
        let tail = old[head..]
            .iter()
            .rev()
            .zip(new[head..].iter().rev())
            .take_while(|(o, n)| o == n)
            .count();

        vec![LineChange {
            line: head + 1,
            old: old[head..old.len() - tail].to_vec(),
            new: new[head..new.len() - tail].to_vec(),
        }]
    }
}

/// Overall summary of one update operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSummary {
    /// Whether files were left untouched on disk
    pub dry_run: bool,
    /// Dependencies that were requested
    pub dependencies: Vec<Dependency>,
    /// Files that changed, in input order
    pub files: Vec<UpdatedFile>,
}

impl UpdateSummary {
    /// Creates a new empty UpdateSummary
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            dependencies: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Adds a changed file
    pub fn add_file(&mut self, file: UpdatedFile) {
        self.files.push(file);
    }

    /// Returns the number of changed files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Returns the total number of changed lines across all files
    pub fn total_changed_lines(&self) -> usize {
        self.files.iter().map(|f| f.changed_lines().len()).sum()
    }
}
