//! repo-setup - configure git hooks and a GitHub Actions workflow
//!
//! Applies the same quality guardrails to every Python project. Templates
//! come from the `templates/` directory shipped with this tool.

use clap::Parser;
use python_toolkit::cli::SetupArgs;
use python_toolkit::config::SetupConfig;
use python_toolkit::error::{AppError, SetupError};
use python_toolkit::logging::init_tracing;
use python_toolkit::output::{use_color, TextReporter};
use python_toolkit::process::SystemProcessRunner;
use python_toolkit::setup::RepoSetup;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = SetupArgs::parse();
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
fn run(args: SetupArgs) -> anyhow::Result<ExitCode> {
    let config = SetupConfig::from_args(&args);
    if args.verbose {
        eprintln!("repo-setup v{}", env!("CARGO_PKG_VERSION"));
        eprintln!("Templates: {}", config.template_dir.display());
    }

    let setup = RepoSetup::new(config, SystemProcessRunner::new())
        .with_reporter(TextReporter::new(use_color(args.no_color)));

    let mut stdout = io::stdout().lock();
    let result = setup.run(&mut stdout);
    stdout.flush()?;
    // The status line on stdout already explains a missing repository
    let report = match result {
        Ok(report) => report,
        Err(AppError::Setup(SetupError::NotARepository { .. })) => return Ok(ExitCode::FAILURE),
        Err(e) => return Err(e.into()),
    };

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
