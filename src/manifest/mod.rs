//! Manifest file detection, requirement location and rewriting
//!
//! This module provides functionality to:
//! - Detect and read Elm manifests in a project directory
//! - Locate a dependency's requirement declaration in manifest text
//! - Rewrite that requirement without disturbing any other byte
//! - Write updated manifests back to disk

mod detector;
mod locator;
mod rewriter;
mod writer;

pub use detector::{detect_manifests, load_manifests, read_manifest, ManifestInfo};
pub use locator::{locate, locate_all};
pub use rewriter::{rewrite, Rewrite};
pub use writer::{write_manifest, ManifestWriter, WriteResult};
