//! python-toolkit - tooling for Python projects
//!
//! This library backs two binaries:
//! - `library-updater`: upgrades every pyproject.toml dependency with pip
//! - `repo-setup`: installs git hooks and a GitHub Actions workflow after
//!   validating the project's tool configuration

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod process;
pub mod progress;
pub mod setup;
pub mod upgrade;
