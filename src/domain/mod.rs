//! Core domain models for python-toolkit
//!
//! This module contains the fundamental types used throughout the application:
//! - Collected dependencies extracted from a manifest
//! - Per-package upgrade results
//! - Upgrade summary aggregation

mod collected;
mod summary;
mod upgrade_result;

pub use collected::CollectedDependencies;
pub use summary::UpgradeSummary;
pub use upgrade_result::{UpgradeOutcome, UpgradeResult};
