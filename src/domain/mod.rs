//! Core domain models for elmup
//!
//! This module contains the fundamental types used throughout the application:
//! - Manifest schema variants
//! - Manifest file snapshots
//! - Dependency and requirement pairings
//! - Summary structures

mod dependency;
mod dependency_file;
mod manifest_kind;
mod summary;

pub use dependency::{Dependency, RequirementChange, RequirementEntry};
pub use dependency_file::DependencyFile;
pub use manifest_kind::ManifestKind;
pub use summary::{LineChange, UpdateSummary, UpdatedFile};
