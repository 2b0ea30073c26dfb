//! Per-package upgrade results

/// Outcome of upgrading a single package
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// Installer exited successfully
    Upgraded,
    /// Installer failed; reason is the last meaningful line of its stderr
    Failed(String),
}

/// Result of an upgrade attempt for a single package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeResult {
    /// Package name
    pub package: String,
    /// What happened
    pub outcome: UpgradeOutcome,
}

impl UpgradeResult {
    /// Creates a successful result
    pub fn upgraded(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            outcome: UpgradeOutcome::Upgraded,
        }
    }

    /// Creates a failed result
    pub fn failed(package: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            outcome: UpgradeOutcome::Failed(reason.into()),
        }
    }

    /// Returns true if the upgrade succeeded
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, UpgradeOutcome::Upgraded)
    }

    /// Returns the failure reason, if any
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.outcome {
            UpgradeOutcome::Upgraded => None,
            UpgradeOutcome::Failed(reason) => Some(reason),
        }
    }
}
