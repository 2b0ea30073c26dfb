//! Manifest (pyproject.toml) loading and dependency collection
//!
//! This module provides functionality to:
//! - Parse the PEP 621 `[project]` table of a pyproject.toml
//! - Collect upgradeable package names across main and optional dependencies
//! - Check a manifest's text for required configuration section headers

mod pyproject_toml;
mod sections;

pub use pyproject_toml::{collect_dependencies, Pyproject};
pub use sections::{missing_sections, section_header};
