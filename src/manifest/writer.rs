//! Manifest file writing
//!
//! This module provides:
//! - ManifestWriter for storing updated manifests next to their originals
//! - Staged writes: every file is written beside its target before any
//!   target is replaced
//! - Dry-run mode support (no actual file modifications)

use crate::domain::DependencyFile;
use crate::error::ManifestError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Writer for updated manifest files
pub struct ManifestWriter {
    /// Project directory the file names are relative to
    root: PathBuf,
    /// Whether to run in dry-run mode (no file modifications)
    dry_run: bool,
}

/// Result of writing one updated manifest
#[derive(Debug)]
pub struct WriteResult {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Whether the file was actually modified
    pub file_modified: bool,
}

impl ManifestWriter {
    /// Create a new ManifestWriter
    pub fn new(root: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            root: root.into(),
            dry_run,
        }
    }

    /// Write one updated file, unless in dry-run mode
    pub fn write(&self, file: &DependencyFile) -> Result<WriteResult, ManifestError> {
        let path = self.root.join(&file.name);
        if file.manifest_kind().is_none() {
            return Err(ManifestError::UnsupportedFormat { path });
        }
        if self.dry_run {
            log::info!("Would update: {}", path.display());
            return Ok(WriteResult {
                path,
                file_modified: false,
            });
        }

        write_manifest(&path, &file.content)?;
        log::info!("Updated: {}", path.display());
        Ok(WriteResult {
            path,
            file_modified: true,
        })
    }

    /// Write every updated file, unless in dry-run mode.
    ///
    /// Contents are staged next to their targets first. A failure while
    /// staging leaves every manifest untouched.
    pub fn write_all(&self, files: &[DependencyFile]) -> Result<Vec<WriteResult>, ManifestError> {
        if self.dry_run {
            return files.iter().map(|file| self.write(file)).collect();
        }

        let mut staged = Vec::with_capacity(files.len());
        for file in files {
            match self.stage(file) {
                Ok(paths) => staged.push(paths),
                Err(e) => {
                    discard_staged(&staged);
                    return Err(e);
                }
            }
        }

        let mut results: Vec<WriteResult> = Vec::with_capacity(staged.len());
        for (i, (staging, path)) in staged.iter().enumerate() {
            if let Err(e) = fs::rename(staging, path) {
                let written: Vec<String> = results
                    .iter()
                    .map(|r| r.path.display().to_string())
                    .collect();
                log::error!(
                    "Failed to replace {}; already updated: [{}]",
                    path.display(),
                    written.join(", ")
                );
                discard_staged(&staged[i..]);
                return Err(ManifestError::write_error(path, e));
            }
            log::info!("Updated: {}", path.display());
            results.push(WriteResult {
                path: path.clone(),
                file_modified: true,
            });
        }
        Ok(results)
    }

    /// Write one file beside its target, returning (staging path, target path)
    fn stage(&self, file: &DependencyFile) -> Result<(PathBuf, PathBuf), ManifestError> {
        let path = self.root.join(&file.name);
        if file.manifest_kind().is_none() {
            return Err(ManifestError::UnsupportedFormat { path });
        }
        let staging = staging_path(&path);
        write_manifest(&staging, &file.content)?;
        log::debug!("Staged {} at {}", path.display(), staging.display());
        Ok((staging, path))
    }
}

/// Hidden sibling used to stage new content, e.g. `.elm.json.elmup`
fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".elmup");
    path.with_file_name(name)
}

fn discard_staged(staged: &[(PathBuf, PathBuf)]) {
    for (staging, _) in staged {
        if let Err(e) = fs::remove_file(staging) {
            log::warn!("Failed to remove {}: {}", staging.display(), e);
        }
    }
}

/// Write content to a manifest file
pub fn write_manifest(path: &Path, content: &str) -> Result<(), ManifestError> {
    fs::write(path, content).map_err(|e| ManifestError::write_error(path, e))
}
