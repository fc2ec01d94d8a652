//! CLI argument parsing module for elmup

use crate::domain::Dependency;
use crate::error::ConfigError;
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Format-preserving Elm manifest requirement updater
#[derive(Parser, Debug, Clone)]
#[command(
    name = "elmup",
    version,
    about = "Rewrite dependency requirements in elm.json / elm-package.json"
)]
pub struct CliArgs {
    /// Project directory containing the manifests (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// JSON file describing the dependency changes (an object or an array)
    #[arg(short, long, value_name = "FILE")]
    pub dependencies: PathBuf,

    // General options
    /// Dry run mode - show what would be updated without making changes
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    // Output options
    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show changes in diff format
    #[arg(long)]
    pub diff: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Dependency input accepted by `--dependencies`
#[derive(Deserialize)]
#[serde(untagged)]
enum DependencyInput {
    Many(Vec<Dependency>),
    One(Box<Dependency>),
}

impl CliArgs {
    /// Reject option combinations that cannot be honoured
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quiet && self.verbose {
            return Err(ConfigError::ConflictingOptions {
                message: "--quiet and --verbose cannot be used together".to_string(),
            });
        }
        if self.json && self.diff {
            return Err(ConfigError::ConflictingOptions {
                message: "--json and --diff cannot be used together".to_string(),
            });
        }
        if !self.path.is_dir() {
            return Err(ConfigError::invalid_path(&self.path, "not a directory"));
        }
        Ok(())
    }

    /// Default log level implied by the verbosity flags
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }

    /// Read the dependency changes named by `--dependencies`
    pub fn load_dependencies(&self) -> Result<Vec<Dependency>, ConfigError> {
        load_dependencies(&self.dependencies)
    }
}

/// Read dependency changes from a JSON file holding one object or an array
pub fn load_dependencies(path: &Path) -> Result<Vec<Dependency>, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::UnreadableDependencies {
            path: path.to_path_buf(),
            source: e,
        })?;
    parse_dependencies(&content).map_err(|e| ConfigError::invalid_dependencies(path, e.to_string()))
}

/// Parse dependency changes from JSON text
pub fn parse_dependencies(content: &str) -> Result<Vec<Dependency>, serde_json::Error> {
    Ok(match serde_json::from_str(content)? {
        DependencyInput::Many(dependencies) => dependencies,
        DependencyInput::One(dependency) => vec![*dependency],
    })
}
