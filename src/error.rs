//! Application error types using thiserror
//!
//! Error hierarchy:
//! - UpdateError: Failures of the requirement update itself
//! - ManifestError: Issues reading or writing manifest files
//! - ConfigError: Issues with CLI configuration and dependency input

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Update related errors
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while computing updated manifest contents
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Not a single manifest differs from its original after all pairings
    #[error("No files have changed!")]
    NoFilesChanged,

    /// None of the supplied files is a recognised manifest
    #[error("no manifest supplied: expected one of {expected}")]
    MissingManifest { expected: String },

    /// Declaration pattern could not be built
    #[error("invalid declaration pattern for '{dependency}': {message}")]
    InvalidPattern { dependency: String, message: String },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write manifest file
    #[error("failed to write manifest file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unsupported manifest format
    #[error("unsupported manifest format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Dependencies file could not be read
    #[error("failed to read dependencies file {path}: {source}")]
    UnreadableDependencies {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dependencies file is not valid dependency JSON
    #[error("invalid dependencies in {path}: {message}")]
    InvalidDependencies { path: PathBuf, message: String },

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

impl UpdateError {
    /// Creates a new InvalidPattern error
    pub fn invalid_pattern(dependency: impl Into<String>, message: impl Into<String>) -> Self {
        UpdateError::InvalidPattern {
            dependency: dependency.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new WriteError
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::WriteError {
            path: path.into(),
            source,
        }
    }
}

impl ConfigError {
    /// Creates a new InvalidDependencies error
    pub fn invalid_dependencies(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidDependencies {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidPath error
    pub fn invalid_path(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPath {
            path: path.into(),
            message: message.into(),
        }
    }
}
