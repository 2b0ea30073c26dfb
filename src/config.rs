//! Immutable run configuration
//!
//! Fixed paths and the required section/tool lists live here. Each binary
//! resolves its config once at startup from CLI flags and environment.

use crate::cli::{SetupArgs, UpgradeArgs};
use std::path::{Path, PathBuf};

/// Manifest path, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "pyproject.toml";

/// Installer path, relative to the working directory
pub const DEFAULT_INSTALLER: &str = if cfg!(windows) {
    ".venv/Scripts/pip.exe"
} else {
    ".venv/bin/pip"
};

/// Command used to locate executables on PATH
pub const LOCATE_COMMAND: &str = if cfg!(windows) { "where" } else { "which" };

/// Hooks destination, relative to the project root (also the `core.hooksPath` value)
pub const HOOKS_DIR: &str = "scripts/hooks";

/// Workflow destination, relative to the project root
pub const WORKFLOWS_DIR: &str = ".github/workflows";

/// Workflow file name, both in the templates and at the destination
pub const WORKFLOW_FILE: &str = "quality.yml";

/// Sections that must appear as `[name]` headers in the manifest
pub const REQUIRED_TOOL_SECTIONS: &[&str] = &[
    "tool.black",
    "tool.flake8",
    "tool.bandit",
    "tool.vulture",
    "tool.pytest",
];

/// Tools expected on PATH (installed through pipx)
pub const REQUIRED_TOOLS: &[&str] = &["black", "flake8", "bandit", "vulture"];

/// Configuration for the dependency upgrader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeConfig {
    /// Manifest to read
    pub manifest_path: PathBuf,
    /// Installer executable
    pub installer_path: PathBuf,
    /// List packages without invoking the installer
    pub dry_run: bool,
    /// Show a spinner while the installer runs
    pub show_progress: bool,
}

impl UpgradeConfig {
    /// Configuration with default paths
    pub fn new() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST),
            installer_path: PathBuf::from(DEFAULT_INSTALLER),
            dry_run: false,
            show_progress: false,
        }
    }

    /// Resolve configuration from CLI arguments
    pub fn from_args(args: &UpgradeArgs) -> Self {
        Self {
            manifest_path: args.manifest.clone(),
            installer_path: args.pip.clone(),
            dry_run: args.dry_run,
            show_progress: !args.quiet,
        }
    }

    /// Set the manifest path (builder pattern)
    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Set the installer path (builder pattern)
    pub fn with_installer(mut self, path: impl Into<PathBuf>) -> Self {
        self.installer_path = path.into();
        self
    }

    /// Enable or disable dry-run mode (builder pattern)
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl Default for UpgradeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for the repository scaffolder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupConfig {
    /// Target project root (absolute)
    pub project_path: PathBuf,
    /// Template directory containing `hooks/` and `github/`
    pub template_dir: PathBuf,
    /// Sections the manifest must declare
    pub required_sections: Vec<&'static str>,
    /// Tools expected on PATH
    pub required_tools: Vec<&'static str>,
}

impl SetupConfig {
    /// Configuration for a project with the given template directory
    pub fn new(project_path: impl AsRef<Path>, template_dir: impl Into<PathBuf>) -> Self {
        let project_path = project_path.as_ref();
        Self {
            project_path: std::path::absolute(project_path)
                .unwrap_or_else(|_| project_path.to_path_buf()),
            template_dir: template_dir.into(),
            required_sections: REQUIRED_TOOL_SECTIONS.to_vec(),
            required_tools: REQUIRED_TOOLS.to_vec(),
        }
    }

    /// Resolve configuration from CLI arguments
    pub fn from_args(args: &SetupArgs) -> Self {
        let template_dir = args.templates.clone().unwrap_or_else(default_template_dir);
        Self::new(&args.path, template_dir)
    }

    /// Manifest inside the project
    pub fn manifest_path(&self) -> PathBuf {
        self.project_path.join(DEFAULT_MANIFEST)
    }

    /// Hook templates source directory
    pub fn hook_templates(&self) -> PathBuf {
        self.template_dir.join("hooks")
    }

    /// Workflow template source file
    pub fn workflow_template(&self) -> PathBuf {
        self.template_dir.join("github").join(WORKFLOW_FILE)
    }

    /// Hooks destination directory
    pub fn hooks_dest(&self) -> PathBuf {
        self.project_path.join(HOOKS_DIR)
    }

    /// Workflows destination directory
    pub fn workflows_dest(&self) -> PathBuf {
        self.project_path.join(WORKFLOWS_DIR)
    }
}

/// `templates/` next to the running executable, else the one shipped in this package
pub fn default_template_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"))
}
