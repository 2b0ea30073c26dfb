//! Repository and manifest validation

use crate::manifest::missing_sections;
use std::path::Path;

/// Returns true if the directory has git metadata (`.git` dir or worktree file)
pub fn is_git_repository(project: &Path) -> bool {
    project.join(".git").exists()
}

/// Result of checking the manifest for required sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestCheck {
    /// Every required section header is present
    Complete,
    /// The manifest file does not exist
    NotFound,
    /// The manifest exists but could not be read
    Unreadable(String),
    /// These section names have no header in the manifest
    MissingSections(Vec<String>),
}

impl ManifestCheck {
    /// Returns true if validation passed
    pub fn is_ok(&self) -> bool {
        matches!(self, ManifestCheck::Complete)
    }
}

/// Check that the manifest exists and mentions every required section header
pub fn check_manifest(manifest_path: &Path, required: &[&str]) -> ManifestCheck {
    if !manifest_path.exists() {
        return ManifestCheck::NotFound;
    }

    let content = match std::fs::read_to_string(manifest_path) {
        Ok(content) => content,
        Err(e) => return ManifestCheck::Unreadable(e.to_string()),
    };

    let missing = missing_sections(&content, required);
    if missing.is_empty() {
        ManifestCheck::Complete
    } else {
        ManifestCheck::MissingSections(missing.into_iter().map(str::to_string).collect())
    }
}
