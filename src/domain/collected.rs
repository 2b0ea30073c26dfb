//! Package names collected from a manifest

use std::collections::HashSet;

/// Upgradeable package names plus the declarations that were skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedDependencies {
    /// Deduplicated package names
    pub packages: HashSet<String>,
    /// Declarations without an upgradeable name, in encounter order
    pub skipped: Vec<String>,
}

impl CollectedDependencies {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a package name; duplicates are ignored
    pub fn add_package(&mut self, name: impl Into<String>) {
        self.packages.insert(name.into());
    }

    /// Records a declaration that cannot be upgraded by name
    pub fn add_skipped(&mut self, declaration: impl Into<String>) {
        self.skipped.push(declaration.into());
    }

    /// Package names in lexicographic order
    pub fn sorted_packages(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.packages.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns true if there is nothing to upgrade
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
