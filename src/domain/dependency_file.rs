//! Manifest file snapshots

use super::ManifestKind;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_directory() -> String {
    "/".to_string()
}

/// An immutable snapshot of a manifest file's name and raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyFile {
    /// Name of the file, unique within one update operation
    pub name: String,
    /// Raw file content
    pub content: String,
    /// Directory the file lives in, relative to the repository root
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl DependencyFile {
    /// Creates a new dependency file in the repository root
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            directory: default_directory(),
        }
    }

    /// Returns a copy of this file carrying new content under the same name
    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            name: self.name.clone(),
            content: content.into(),
            directory: self.directory.clone(),
        }
    }

    /// Returns the manifest schema, if this file is an Elm manifest
    pub fn manifest_kind(&self) -> Option<ManifestKind> {
        ManifestKind::from_file_name(&self.name)
    }
}

impl fmt::Display for DependencyFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_file_new() {
        let file = DependencyFile::new("elm.json", "{}");
        assert_eq!(file.name, "elm.json");
        assert_eq!(file.content, "{}");
        assert_eq!(file.directory, "/");
    }

    #[test]
    fn test_with_content_keeps_identity() {
        let mut file = DependencyFile::new("elm.json", "{}");
        file.directory = "/frontend".to_string();
        let updated = file.with_content("{ }");

        assert_eq!(updated.name, "elm.json");
        assert_eq!(updated.directory, "/frontend");
        assert_eq!(updated.content, "{ }");
        assert_eq!(file.content, "{}");
    }

    #[test]
    fn test_manifest_kind() {
        let file = DependencyFile::new("elm-package.json", "{}");
        assert_eq!(file.manifest_kind(), Some(ManifestKind::ElmPackage));

        let file = DependencyFile::new("README.md", "# hi");
        assert_eq!(file.manifest_kind(), None);
    }

    #[test]
    fn test_serde_default_directory() {
        let file: DependencyFile =
            serde_json::from_str(r#"{"name": "elm.json", "content": "{}"}"#).unwrap();
        assert_eq!(file.directory, "/");
    }
}
