//! Manifest file detection
//!
//! Reads the Elm manifests present in a project directory into
//! `DependencyFile` snapshots named relative to that directory, which is the
//! naming dependency requirement entries use.

use crate::domain::{DependencyFile, ManifestKind};
use crate::error::ManifestError;
use std::fs;
use std::path::{Path, PathBuf};

/// Information about a detected manifest file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestInfo {
    /// Path to the manifest file
    pub path: PathBuf,
    /// Schema of the manifest
    pub kind: ManifestKind,
}

impl ManifestInfo {
    /// Create a new ManifestInfo
    pub fn new(path: impl Into<PathBuf>, kind: ManifestKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// Detect all Elm manifest files directly inside `dir`
pub fn detect_manifests(dir: &Path) -> Vec<ManifestInfo> {
    ManifestKind::all()
        .iter()
        .filter_map(|kind| {
            let path = dir.join(kind.manifest_filename());
            path.is_file().then(|| ManifestInfo::new(path, *kind))
        })
        .collect()
}

/// Read a manifest file content safely
pub fn read_manifest(path: &Path) -> Result<String, ManifestError> {
    fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))
}

/// Detect and read every Elm manifest in `dir`
pub fn load_manifests(dir: &Path) -> Result<Vec<DependencyFile>, ManifestError> {
    detect_manifests(dir)
        .into_iter()
        .map(|info| {
            let content = read_manifest(&info.path)?;
            log::debug!("Loaded {} ({} bytes)", info.path.display(), content.len());
            Ok(DependencyFile::new(info.kind.manifest_filename(), content))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_both_manifests() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("elm.json"), "{}").unwrap();
        fs::write(dir.path().join("elm-package.json"), "{}").unwrap();

        let manifests = detect_manifests(dir.path());
        assert_eq!(manifests.len(), 2);
        assert_eq!(manifests[0].kind, ManifestKind::ElmJson);
        assert_eq!(manifests[1].kind, ManifestKind::ElmPackage);
    }

    #[test]
    fn test_detect_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("elm.json")).unwrap();

        assert!(detect_manifests(dir.path()).is_empty());
    }

    #[test]
    fn test_detect_empty_dir() {
        let dir = TempDir::new().unwrap();
        assert!(detect_manifests(dir.path()).is_empty());
    }

    #[test]
    fn test_load_manifests_names_relative() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("elm.json"), "{\"type\": \"application\"}").unwrap();

        let files = load_manifests(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "elm.json");
        assert_eq!(files[0].content, "{\"type\": \"application\"}");
    }

    #[test]
    fn test_read_manifest_not_found() {
        let result = read_manifest(Path::new("/nonexistent/path/elm.json"));
        assert!(result.is_err());
    }
}
