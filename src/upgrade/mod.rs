//! Upgrade orchestrator for the `library-updater` binary
//!
//! Workflow: check preconditions → collect → upgrade each package (sorted) → summarize.
//! A failing package never stops the rest; each package is attempted once.

use crate::config::UpgradeConfig;
use crate::domain::{CollectedDependencies, UpgradeResult, UpgradeSummary};
use crate::error::{AppError, ManifestError, UpgradeError};
use crate::manifest::{collect_dependencies, Pyproject};
use crate::output::TextReporter;
use crate::process::{CommandSpec, ProcessRunner};
use crate::progress::Progress;
use std::io::Write;

/// Outcome of a full upgrader run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeReport {
    /// What was read from the manifest
    pub collected: CollectedDependencies,
    /// Per-package results (empty for dry runs and empty manifests)
    pub summary: UpgradeSummary,
}

impl UpgradeReport {
    /// True when no upgrade failed
    pub fn is_success(&self) -> bool {
        !self.summary.has_failures()
    }
}

/// Drives pip over every package declared in the manifest
pub struct Upgrader<R: ProcessRunner> {
    config: UpgradeConfig,
    runner: R,
    reporter: TextReporter,
}

impl<R: ProcessRunner> Upgrader<R> {
    /// Create an upgrader with a plain reporter
    pub fn new(config: UpgradeConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            reporter: TextReporter::plain(),
        }
    }

    /// Use the given reporter for output (builder pattern)
    pub fn with_reporter(mut self, reporter: TextReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Manifest must exist; the installer must exist unless this is a dry run
    pub fn check_preconditions(&self) -> Result<(), AppError> {
        if !self.config.manifest_path.exists() {
            return Err(ManifestError::not_found(&self.config.manifest_path).into());
        }
        if !self.config.dry_run && !self.config.installer_path.exists() {
            return Err(UpgradeError::installer_not_found(&self.config.installer_path).into());
        }
        Ok(())
    }

    /// Read the manifest and collect package names
    pub fn collect(&self) -> Result<CollectedDependencies, ManifestError> {
        let pyproject = Pyproject::load(&self.config.manifest_path)?;
        Ok(collect_dependencies(&pyproject))
    }

    /// `<installer> install --upgrade <package>`
    pub fn upgrade_command(&self, package: &str) -> CommandSpec {
        CommandSpec::new(&self.config.installer_path).args(["install", "--upgrade", package])
    }

    /// Upgrade one package, classifying the installer's exit status
    pub fn upgrade_package(&self, package: &str) -> UpgradeResult {
        let command = self.upgrade_command(package);
        match self.runner.run(&command) {
            Ok(output) if output.success() => UpgradeResult::upgraded(package),
            Ok(output) => {
                let reason = match output.last_stderr_line() {
                    Some(line) => line.to_string(),
                    None => match output.code {
                        Some(code) => format!("exited with status {}", code),
                        None => "terminated by signal".to_string(),
                    },
                };
                tracing::warn!(package, %reason, "upgrade failed");
                UpgradeResult::failed(package, reason)
            }
            Err(e) => {
                let reason = format!("failed to execute {}: {}", command.program_name(), e);
                tracing::warn!(package, %reason, "upgrade failed");
                UpgradeResult::failed(package, reason)
            }
        }
    }

    /// Upgrade every package once, in lexicographic order
    pub fn upgrade_all<I, S>(
        &self,
        packages: I,
        writer: &mut dyn Write,
    ) -> std::io::Result<UpgradeSummary>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered: Vec<String> = packages
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();
        ordered.sort_unstable();
        ordered.dedup();

        let mut progress = Progress::for_terminal(self.config.show_progress);
        let mut summary = UpgradeSummary::new();

        for package in &ordered {
            progress.spinner(&format!("Upgrading {}", package));
            let result = self.upgrade_package(package);
            progress.finish_and_clear();

            self.reporter.package_line(writer, &result)?;
            writer.flush()?;
            summary.add_result(result);
        }

        Ok(summary)
    }

    /// Full run: preconditions, collection, upgrades, summary
    pub fn run(&self, writer: &mut dyn Write) -> Result<UpgradeReport, AppError> {
        self.check_preconditions()?;

        let collected = self.collect()?;
        tracing::info!(
            packages = collected.packages.len(),
            skipped = collected.skipped.len(),
            "collected dependencies"
        );

        if collected.is_empty() {
            writeln!(writer, "No dependencies found")?;
            return Ok(UpgradeReport {
                collected,
                summary: UpgradeSummary::new(),
            });
        }

        if self.config.dry_run {
            self.reporter.dry_run_listing(writer, &collected)?;
            return Ok(UpgradeReport {
                collected,
                summary: UpgradeSummary::new(),
            });
        }

        self.reporter.upgrade_plan(writer, &collected)?;
        let summary = self.upgrade_all(collected.sorted_packages(), writer)?;
        self.reporter.upgrade_summary(writer, &summary)?;

        Ok(UpgradeReport { collected, summary })
    }
}
