//! Upgrade summary aggregation

use super::UpgradeResult;

/// Overall summary of an upgrade run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeSummary {
    /// Results in the order packages were attempted
    pub results: Vec<UpgradeResult>,
}

impl UpgradeSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a result
    pub fn add_result(&mut self, result: UpgradeResult) {
        self.results.push(result);
    }

    /// Returns the number of packages upgraded
    pub fn upgraded_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    /// Returns the number of failed upgrades
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }

    /// Returns all failed results
    pub fn failures(&self) -> impl Iterator<Item = &UpgradeResult> {
        self.results.iter().filter(|r| !r.is_success())
    }

    /// Returns true if any upgrade failed
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    /// Package names in attempt order
    pub fn attempted(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.package.as_str()).collect()
    }
}
