//! Elm manifest schema variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Supported manifest schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestKind {
    /// Elm 0.19 manifest (elm.json) with nested direct/indirect groups
    ElmJson,
    /// Legacy Elm 0.18 manifest (elm-package.json) with a flat dependency map
    ElmPackage,
}

impl ManifestKind {
    /// Returns the manifest filename for this schema
    pub fn manifest_filename(&self) -> &'static str {
        match self {
            ManifestKind::ElmJson => "elm.json",
            ManifestKind::ElmPackage => "elm-package.json",
        }
    }

    /// Returns the display name for this schema
    pub fn display_name(&self) -> &'static str {
        match self {
            ManifestKind::ElmJson => "elm.json (0.19)",
            ManifestKind::ElmPackage => "elm-package.json (0.18)",
        }
    }

    /// Detect the schema from a dependency file name.
    ///
    /// Only the final path component is considered, so `frontend/elm.json`
    /// is recognised as well as `elm.json`.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let file_name = Path::new(name).file_name()?.to_str()?;
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.manifest_filename() == file_name)
    }

    /// Returns all supported schemas, newest first
    pub fn all() -> &'static [ManifestKind] {
        &[ManifestKind::ElmJson, ManifestKind::ElmPackage]
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
