//! elmup - Elm manifest requirement updater library
//!
//! This library rewrites dependency requirements in Elm manifests:
//! - elm.json (Elm 0.19, exact versions)
//! - elm-package.json (Elm 0.18, version ranges)
//!
//! The output differs from the input only inside the rewritten requirement
//! values; everything else is preserved byte for byte.

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;

pub use domain::{Dependency, DependencyFile, RequirementEntry};
pub use error::UpdateError;
pub use orchestrator::{update, FileUpdater};
