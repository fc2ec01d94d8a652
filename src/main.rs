//! elmup - Elm manifest requirement updater CLI tool
//!
//! Rewrites dependency requirements in elm.json and elm-package.json
//! without touching any other byte of the file.

use clap::Parser;
use elmup::app;
use elmup::cli::CliArgs;
use elmup::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .format_timestamp(None)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    log::debug!("elmup v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Target: {}", args.path.display());

    let summary = app::run(&args)?;

    let mut output_config =
        OutputConfig::from_cli(args.json, args.diff, args.verbose, args.quiet, args.dry_run);
    if args.no_color {
        output_config = output_config.without_color();
    }
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitCode::SUCCESS)
}
