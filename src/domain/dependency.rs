//! Dependency information structures

use serde::{Deserialize, Serialize};
use std::fmt;

fn default_package_manager() -> String {
    "elm".to_string()
}

/// The requirement a dependency has in one particular manifest file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementEntry {
    /// Name of the manifest file this entry applies to
    pub file: String,
    /// Version constraint, e.g. `1.0.0` or `1.0.0 <= v < 2.0.0`
    pub requirement: Option<String>,
    /// Classification tags such as `direct` or `test`
    #[serde(default)]
    pub groups: Vec<String>,
    /// Opaque source information
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
}

impl RequirementEntry {
    /// Creates a new requirement entry with no groups or source
    pub fn new(file: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            requirement: Some(requirement.into()),
            groups: Vec::new(),
            source: None,
        }
    }

    /// Returns the requirement string, if any
    pub fn requirement(&self) -> Option<&str> {
        self.requirement.as_deref()
    }
}

/// One (previous, updated) requirement pairing of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementChange<'a> {
    /// Manifest file the change applies to
    pub file: &'a str,
    /// Requirement currently declared in the file
    pub previous: Option<&'a str>,
    /// Requirement to write
    pub updated: Option<&'a str>,
}

impl RequirementChange<'_> {
    /// Returns true if both sides are known and differ
    pub fn is_change(&self) -> bool {
        matches!((self.previous, self.updated), (Some(old), Some(new)) if old != new)
    }
}

/// A package dependency together with its old and new requirements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Package name, e.g. `elm/html`
    pub name: String,
    /// Version being updated to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Version being updated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_version: Option<String>,
    /// Requirements after the update, one per manifest
    #[serde(default)]
    pub requirements: Vec<RequirementEntry>,
    /// Requirements before the update, index-aligned with `requirements`
    #[serde(default)]
    pub previous_requirements: Vec<RequirementEntry>,
    /// Package manager name
    #[serde(default = "default_package_manager")]
    pub package_manager: String,
}

impl Dependency {
    /// Creates a new dependency with no requirements
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            previous_version: None,
            requirements: Vec::new(),
            previous_requirements: Vec::new(),
            package_manager: default_package_manager(),
        }
    }

    /// Sets the target and previous versions (builder pattern)
    pub fn with_versions(
        mut self,
        previous_version: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.previous_version = Some(previous_version.into());
        self.version = Some(version.into());
        self
    }

    /// Adds a requirement pairing for one manifest file (builder pattern)
    pub fn with_requirement(
        mut self,
        file: impl Into<String>,
        previous: impl Into<String>,
        updated: impl Into<String>,
    ) -> Self {
        let file = file.into();
        self.previous_requirements
            .push(RequirementEntry::new(file.clone(), previous));
        self.requirements.push(RequirementEntry::new(file, updated));
        self
    }

    /// Returns the index-aligned requirement pairings.
    ///
    /// The file name comes from the updated entry; a missing previous entry
    /// yields `previous: None`.
    pub fn requirement_changes(&self) -> impl Iterator<Item = RequirementChange<'_>> {
        self.requirements
            .iter()
            .enumerate()
            .map(move |(i, entry)| RequirementChange {
                file: &entry.file,
                previous: self
                    .previous_requirements
                    .get(i)
                    .and_then(RequirementEntry::requirement),
                updated: entry.requirement(),
            })
    }

    /// Returns true if any requirement actually changes
    pub fn has_requirement_changes(&self) -> bool {
        self.requirement_changes().any(|c| c.is_change())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.previous_version, &self.version) {
            (Some(from), Some(to)) => write!(f, "{} {} -> {}", self.name, from, to),
            (None, Some(to)) => write!(f, "{} -> {}", self.name, to),
            _ => write!(f, "{}", self.name),
        }
    }
}
