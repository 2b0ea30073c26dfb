//! Text output for human-readable display
//!
//! This module provides:
//! - Section headers framed by `=` rules
//! - `[OK]` / `[!!]` status lines
//! - Per-package upgrade lines and the upgrade summary

use crate::domain::{CollectedDependencies, UpgradeResult, UpgradeSummary};
use colored::Colorize;
use std::io::Write;

/// Failure reasons longer than this are cut for display
pub const MAX_REASON_LEN: usize = 80;

const RULE_WIDTH: usize = 60;

/// Truncate a failure reason to [`MAX_REASON_LEN`] characters
pub fn truncate_reason(reason: &str) -> &str {
    match reason.char_indices().nth(MAX_REASON_LEN) {
        Some((idx, _)) => &reason[..idx],
        None => reason,
    }
}

/// Writes status lines, optionally colored
#[derive(Debug, Clone, Copy)]
pub struct TextReporter {
    color: bool,
}

impl TextReporter {
    /// Create a reporter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Create a reporter without colors
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn ok_label(&self) -> String {
        if self.color {
            "[OK]".green().to_string()
        } else {
            "[OK]".to_string()
        }
    }

    fn fail_label(&self) -> String {
        if self.color {
            "[!!]".red().bold().to_string()
        } else {
            "[!!]".to_string()
        }
    }

    /// Blank line, rule, title, rule
    pub fn header(&self, writer: &mut dyn Write, title: &str) -> std::io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let title = if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        };
        writeln!(writer, "\n{}\n{}\n{}", rule, title, rule)
    }

    /// `  [OK] msg` or `  [!!] msg`
    pub fn status(&self, writer: &mut dyn Write, success: bool, msg: &str) -> std::io::Result<()> {
        let label = if success {
            self.ok_label()
        } else {
            self.fail_label()
        };
        writeln!(writer, "  {} {}", label, msg)
    }

    /// Remediation hint aligned under a status message
    pub fn hint(&self, writer: &mut dyn Write, msg: &str) -> std::io::Result<()> {
        writeln!(writer, "       {}", msg)
    }

    /// Indented informational line
    pub fn note(&self, writer: &mut dyn Write, msg: &str) -> std::io::Result<()> {
        writeln!(writer, "  {}", msg)
    }

    /// Opening lines of an upgrade run
    pub fn upgrade_plan(
        &self,
        writer: &mut dyn Write,
        collected: &CollectedDependencies,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "Upgrading {} dependencies...",
            collected.packages.len()
        )?;
        if !collected.skipped.is_empty() {
            writeln!(
                writer,
                "Skipping {} git/url dependencies\n",
                collected.skipped.len()
            )?;
        }
        Ok(())
    }

    /// Dry-run listing of what would be upgraded
    pub fn dry_run_listing(
        &self,
        writer: &mut dyn Write,
        collected: &CollectedDependencies,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "Would upgrade {} dependencies:",
            collected.packages.len()
        )?;
        for package in collected.sorted_packages() {
            writeln!(writer, "  {}", package)?;
        }
        if !collected.skipped.is_empty() {
            writeln!(writer, "\nSkipping {} git/url dependencies:", collected.skipped.len())?;
            for declaration in &collected.skipped {
                writeln!(writer, "  {}", declaration)?;
            }
        }
        Ok(())
    }

    /// `  name ... OK` / `  name ... FAILED`
    pub fn package_line(
        &self,
        writer: &mut dyn Write,
        result: &UpgradeResult,
    ) -> std::io::Result<()> {
        let status = match (result.is_success(), self.color) {
            (true, true) => "OK".green().to_string(),
            (true, false) => "OK".to_string(),
            (false, true) => "FAILED".red().bold().to_string(),
            (false, false) => "FAILED".to_string(),
        };
        writeln!(writer, "  {} ... {}", result.package, status)
    }

    /// Final counts followed by each failure with its truncated reason
    pub fn upgrade_summary(
        &self,
        writer: &mut dyn Write,
        summary: &UpgradeSummary,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "\nDone: {} upgraded, {} failed",
            summary.upgraded_count(),
            summary.failed_count()
        )?;

        if summary.has_failures() {
            writeln!(writer, "\nFailed:")?;
            for failure in summary.failures() {
                let reason = failure.failure_reason().unwrap_or_default();
                writeln!(
                    writer,
                    "  - {}: {}",
                    failure.package,
                    truncate_reason(reason)
                )?;
            }
        }
        Ok(())
    }
}
