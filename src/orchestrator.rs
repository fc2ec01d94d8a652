//! Update orchestrator for applying requirement changes across manifests
//!
//! This module provides:
//! - Pairing of each dependency requirement with the manifest it names
//! - Cumulative rewriting when several dependencies touch one manifest
//! - Collection of exactly the manifests whose content changed
//! - The fatal "no files have changed" check

use crate::domain::{Dependency, DependencyFile, ManifestKind, UpdatedFile};
use crate::error::UpdateError;
use crate::manifest::rewrite;
use std::collections::{HashMap, HashSet};

/// Computes updated manifest contents for a set of dependency changes
#[derive(Debug, Clone)]
pub struct FileUpdater {
    /// Manifest snapshots, in caller order
    files: Vec<DependencyFile>,
    /// Dependencies whose requirements should be rewritten
    dependencies: Vec<Dependency>,
}

impl FileUpdater {
    /// Create a new updater.
    ///
    /// Fails when `files` is empty.
    pub fn new(
        files: Vec<DependencyFile>,
        dependencies: Vec<Dependency>,
    ) -> Result<Self, UpdateError> {
        let updater = Self {
            files,
            dependencies,
        };
        updater.check_required_files()?;
        Ok(updater)
    }

    /// File names this updater is responsible for
    pub fn updated_files_patterns() -> Vec<&'static str> {
        ManifestKind::all()
            .iter()
            .map(|kind| kind.manifest_filename())
            .collect()
    }

    fn check_required_files(&self) -> Result<(), UpdateError> {
        if !self.files.is_empty() {
            return Ok(());
        }
        Err(UpdateError::MissingManifest {
            expected: Self::updated_files_patterns().join(", "),
        })
    }

    /// Find the supplied file a requirement entry refers to
    fn file_named(&self, name: &str) -> Option<&DependencyFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Apply every requirement change and return the changed manifests,
    /// each paired with its original
    pub fn updated_files(&self) -> Result<Vec<UpdatedFile>, UpdateError> {
        let mut contents: HashMap<&str, String> = HashMap::new();

        for dependency in &self.dependencies {
            if !dependency.has_requirement_changes() {
                log::debug!("{}: no requirement changes, skipping", dependency.name);
                continue;
            }
            for change in dependency.requirement_changes() {
                let Some(file) = self.file_named(change.file) else {
                    log::debug!(
                        "{}: {} not among supplied files, skipping",
                        dependency.name,
                        change.file
                    );
                    continue;
                };
                let (Some(old), Some(new)) = (change.previous, change.updated) else {
                    log::debug!(
                        "{}: no previous requirement in {}, skipping",
                        dependency.name,
                        change.file
                    );
                    continue;
                };

                let current = contents
                    .get(file.name.as_str())
                    .map(String::as_str)
                    .unwrap_or(file.content.as_str());

                let result = rewrite(current, &dependency.name, old, new)?;
                if result.is_updated() {
                    log::debug!("{}: {} -> {} in {}", dependency.name, old, new, file.name);
                } else {
                    log::debug!("{}: nothing to change in {}", dependency.name, file.name);
                }
                let content = result.into_content(current);
                contents.insert(file.name.as_str(), content);
            }
        }

        let mut seen = HashSet::new();
        let updated: Vec<UpdatedFile> = self
            .files
            .iter()
            .filter(|file| seen.insert(file.name.as_str()))
            .filter_map(|file| {
                let content = contents.get(file.name.as_str())?;
                (*content != file.content)
                    .then(|| UpdatedFile::new(file.clone(), file.with_content(content.as_str())))
            })
            .collect();

        if updated.is_empty() {
            return Err(UpdateError::NoFilesChanged);
        }
        for file in &updated {
            log::info!("{} changed", file.name());
        }
        Ok(updated)
    }

    /// Apply every requirement change and return only the changed manifests
    pub fn updated_dependency_files(&self) -> Result<Vec<DependencyFile>, UpdateError> {
        Ok(self
            .updated_files()?
            .into_iter()
            .map(|file| file.updated)
            .collect())
    }
}

/// Rewrite `files` for `dependencies`, returning only the manifests that
/// changed
pub fn update(
    files: &[DependencyFile],
    dependencies: &[Dependency],
) -> Result<Vec<DependencyFile>, UpdateError> {
    FileUpdater::new(files.to_vec(), dependencies.to_vec())?.updated_dependency_files()
}
