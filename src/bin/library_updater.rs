//! library-updater - upgrade all pyproject.toml dependencies to their latest versions
//!
//! Run from the project root. Reads `[project].dependencies` and every
//! `[project.optional-dependencies]` group, then runs
//! `.venv/bin/pip install --upgrade <name>` for each package.

use clap::Parser;
use python_toolkit::cli::UpgradeArgs;
use python_toolkit::config::UpgradeConfig;
use python_toolkit::logging::init_tracing;
use python_toolkit::output::{use_color, TextReporter};
use python_toolkit::process::SystemProcessRunner;
use python_toolkit::upgrade::Upgrader;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = UpgradeArgs::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: UpgradeArgs) -> anyhow::Result<ExitCode> {
    if args.verbose {
        eprintln!("library-updater v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Manifest: {}", args.manifest.display());
        eprintln!("Installer: {}", args.pip.display());
    }

    let config = UpgradeConfig::from_args(&args);
    let upgrader = Upgrader::new(config, SystemProcessRunner::new())
        .with_reporter(TextReporter::new(use_color(args.no_color)));

    let mut stdout = io::stdout().lock();
    let report = upgrader.run(&mut stdout)?;
    stdout.flush()?;

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
