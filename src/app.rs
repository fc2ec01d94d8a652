//! Command workflow: load → update → write
//!
//! Glues the CLI collaborators (manifest detection and writing) around the
//! pure update core.

use crate::cli::CliArgs;
use crate::domain::UpdateSummary;
use crate::error::AppError;
use crate::manifest::{load_manifests, ManifestWriter};
use crate::orchestrator::FileUpdater;

/// Run one update for the given arguments and return what changed
pub fn run(args: &CliArgs) -> Result<UpdateSummary, AppError> {
    args.validate()?;

    let dependencies = args.load_dependencies()?;
    let files = load_manifests(&args.path)?;
    log::debug!(
        "{} dependency change(s), {} manifest(s) in {}",
        dependencies.len(),
        files.len(),
        args.path.display()
    );

    let updater = FileUpdater::new(files, dependencies.clone())?;
    let updated = updater.updated_files()?;

    let contents: Vec<_> = updated.iter().map(|file| file.updated.clone()).collect();
    ManifestWriter::new(&args.path, args.dry_run).write_all(&contents)?;

    let mut summary = UpdateSummary::new(args.dry_run);
    summary.dependencies = dependencies;
    for file in updated {
        summary.add_file(file);
    }
    Ok(summary)
}
