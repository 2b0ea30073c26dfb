//! CLI argument parsing for the `library-updater` and `repo-setup` binaries

use crate::config::{DEFAULT_INSTALLER, DEFAULT_MANIFEST};
use clap::Parser;
use std::path::PathBuf;

/// Upgrade every pyproject.toml dependency to its latest version
#[derive(Parser, Debug, Clone)]
#[command(
    name = "library-updater",
    version,
    about = "Upgrade all pyproject.toml dependencies to their latest versions"
)]
pub struct UpgradeArgs {
    /// Path to the project manifest
    #[arg(long, env = "LIBRARY_UPDATER_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub manifest: PathBuf,

    /// Path to the pip executable used for upgrades
    #[arg(long, env = "LIBRARY_UPDATER_PIP", default_value = DEFAULT_INSTALLER)]
    pub pip: PathBuf,

    /// Dry run mode - list packages without upgrading them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - no progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Configure git hooks and a GitHub Actions workflow for a Python project
#[derive(Parser, Debug, Clone)]
#[command(
    name = "repo-setup",
    version,
    about = "Install quality guardrails (git hooks, CI workflow) into a repository"
)]
pub struct SetupArgs {
    /// Target project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Directory holding the hooks/ and github/ templates
    #[arg(long, env = "REPO_SETUP_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Enable verbose output (debug logging on stderr)
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
