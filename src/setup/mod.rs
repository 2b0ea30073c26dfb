//! Repository scaffolding for the `repo-setup` binary
//!
//! Steps, each under its own header:
//! 1. Check pyproject.toml for the required tool sections
//! 2. Install git hooks and point `core.hooksPath` at them
//! 3. Install the GitHub Actions workflow
//! 4. Check that the linters are available locally
//!
//! Steps 2 and 3 only run when step 1 passes. Step 4 always runs.

mod installer;
mod tools;
mod validator;

pub use installer::{configure_hooks_path, hooks_path_command, install_hooks, install_workflow};
pub use tools::{check_tools, locate_tool, ToolStatus};
pub use validator::{check_manifest, is_git_repository, ManifestCheck};

use crate::config::{SetupConfig, DEFAULT_MANIFEST, HOOKS_DIR, WORKFLOWS_DIR, WORKFLOW_FILE};
use crate::error::{AppError, SetupError};
use crate::output::TextReporter;
use crate::process::ProcessRunner;
use std::io::Write;

const SKIP_MESSAGE: &str = "Skipping - fix pyproject.toml first";

/// What a setup run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Manifest validation result
    pub manifest: ManifestCheck,
    /// Hook files copied into the project
    pub installed_hooks: Vec<String>,
    /// Whether `core.hooksPath` was set (`None` when skipped)
    pub hooks_path_configured: Option<bool>,
    /// Whether the workflow file was written
    pub workflow_installed: bool,
    /// Availability of each local tool
    pub tools: Vec<ToolStatus>,
}

impl SetupReport {
    /// Exit status depends only on manifest validation
    pub fn is_success(&self) -> bool {
        self.manifest.is_ok()
    }
}

/// Scaffolds a single repository
pub struct RepoSetup<R: ProcessRunner> {
    config: SetupConfig,
    runner: R,
    reporter: TextReporter,
}

impl<R: ProcessRunner> RepoSetup<R> {
    /// Create a scaffolder with a plain reporter
    pub fn new(config: SetupConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            reporter: TextReporter::plain(),
        }
    }

    /// Use the given reporter for output (builder pattern)
    pub fn with_reporter(mut self, reporter: TextReporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Run every step, writing status lines to `writer`
    pub fn run(&self, writer: &mut dyn Write) -> Result<SetupReport, AppError> {
        let project = &self.config.project_path;
        let title = format!("REPO SETUP: {}", project.display());
        self.reporter.header(writer, &title)?;

        if !is_git_repository(project) {
            self.reporter.status(writer, false, "Not a git repository")?;
            return Err(SetupError::NotARepository {
                path: project.clone(),
            }
            .into());
        }

        self.reporter.header(writer, "1. CHECKING PYPROJECT.TOML")?;
        let manifest = self.check_manifest(writer)?;
        let manifest_ok = manifest.is_ok();
        tracing::info!(ok = manifest_ok, "manifest validation finished");

        self.reporter.header(writer, "2. SETTING UP GIT HOOKS")?;
        let (installed_hooks, hooks_path_configured) = if manifest_ok {
            let (hooks, configured) = self.setup_git_hooks(writer)?;
            (hooks, Some(configured))
        } else {
            self.reporter.note(writer, SKIP_MESSAGE)?;
            (Vec::new(), None)
        };

        self.reporter.header(writer, "3. SETTING UP GITHUB WORKFLOW")?;
        let workflow_installed = if manifest_ok {
            self.setup_workflow(writer)?;
            true
        } else {
            self.reporter.note(writer, SKIP_MESSAGE)?;
            false
        };

        self.reporter.header(writer, "4. CHECKING LOCAL TOOLS (pipx)")?;
        let tools = self.check_local_tools(writer)?;

        self.reporter.header(writer, "SETUP COMPLETE")?;
        let report = SetupReport {
            manifest,
            installed_hooks,
            hooks_path_configured,
            workflow_installed,
            tools,
        };
        self.write_closing(writer, &report)?;
        Ok(report)
    }

    fn check_manifest(&self, writer: &mut dyn Write) -> std::io::Result<ManifestCheck> {
        let check = check_manifest(
            &self.config.manifest_path(),
            &self.config.required_sections,
        );
        match &check {
            ManifestCheck::Complete => {
                self.reporter.status(
                    writer,
                    true,
                    &format!("{} has all required tool sections", DEFAULT_MANIFEST),
                )?;
            }
            ManifestCheck::NotFound => {
                self.reporter
                    .status(writer, false, &format!("{} not found", DEFAULT_MANIFEST))?;
                self.reporter
                    .hint(writer, "Run /python-pyproject skill to create it first")?;
            }
            ManifestCheck::Unreadable(message) => {
                self.reporter.status(
                    writer,
                    false,
                    &format!("Failed to read {}: {}", DEFAULT_MANIFEST, message),
                )?;
            }
            ManifestCheck::MissingSections(missing) => {
                self.reporter.status(
                    writer,
                    false,
                    &format!("Missing sections: {}", missing.join(", ")),
                )?;
                self.reporter
                    .hint(writer, "Run /python-pyproject skill to add missing sections")?;
            }
        }
        Ok(check)
    }

    fn setup_git_hooks(&self, writer: &mut dyn Write) -> Result<(Vec<String>, bool), AppError> {
        let hooks = install_hooks(&self.config.hook_templates(), &self.config.hooks_dest())?;
        for hook in &hooks {
            self.reporter
                .status(writer, true, &format!("Copied {} to {}/", hook, HOOKS_DIR))?;
        }

        let configured = match configure_hooks_path(&self.runner, &self.config.project_path) {
            Ok(()) => {
                self.reporter.status(
                    writer,
                    true,
                    &format!("Configured git to use {}/", HOOKS_DIR),
                )?;
                true
            }
            Err(stderr) => {
                tracing::warn!(%stderr, "git config core.hooksPath failed");
                self.reporter.status(
                    writer,
                    false,
                    &format!("Failed to configure git: {}", stderr),
                )?;
                false
            }
        };
        Ok((hooks, configured))
    }

    fn setup_workflow(&self, writer: &mut dyn Write) -> Result<(), AppError> {
        install_workflow(
            &self.config.workflow_template(),
            &self.config.workflows_dest(),
        )?;
        self.reporter.status(
            writer,
            true,
            &format!("Copied {} to {}/", WORKFLOW_FILE, WORKFLOWS_DIR),
        )?;
        Ok(())
    }

    fn check_local_tools(&self, writer: &mut dyn Write) -> std::io::Result<Vec<ToolStatus>> {
        let statuses = check_tools(&self.runner, &self.config.required_tools);
        for status in &statuses {
            match &status.path {
                Some(path) => self.reporter.status(
                    writer,
                    true,
                    &format!("{} available at {}", status.name, path),
                )?,
                None => self.reporter.status(
                    writer,
                    false,
                    &format!(
                        "{} not found - install with: {}",
                        status.name,
                        status.install_hint()
                    ),
                )?,
            }
        }
        Ok(statuses)
    }

    fn write_closing(&self, writer: &mut dyn Write, report: &SetupReport) -> std::io::Result<()> {
        if !report.is_success() {
            return writeln!(
                writer,
                "\nAction required: Run /python-pyproject to configure {}",
                DEFAULT_MANIFEST
            );
        }

        writeln!(writer, "\nRepository is configured with quality guardrails:")?;
        writeln!(
            writer,
            "  - Git hooks: {}/{}",
            HOOKS_DIR,
            report.installed_hooks.join(", ")
        )?;
        writeln!(writer, "  - GitHub Actions: {}/{}", WORKFLOWS_DIR, WORKFLOW_FILE)?;
        writeln!(writer, "  - Config source: {}", DEFAULT_MANIFEST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REQUIRED_TOOL_SECTIONS;
    use crate::process::testing::MockRunner;
    use crate::process::ProcessOutput;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn templates() -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        let hooks = temp_dir.path().join("hooks");
        fs::create_dir_all(&hooks).unwrap();
        fs::write(hooks.join("pre-commit"), "#!/bin/sh\n").unwrap();
        fs::write(hooks.join("pre-push"), "#!/bin/sh\n").unwrap();
        let github = temp_dir.path().join("github");
        fs::create_dir_all(&github).unwrap();
        fs::write(github.join("quality.yml"), "name: Quality\n").unwrap();
        temp_dir
    }

    fn repo(pyproject: Option<&str>) -> TempDir {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        if let Some(content) = pyproject {
            fs::write(temp_dir.path().join("pyproject.toml"), content).unwrap();
        }
        temp_dir
    }

    fn complete_manifest() -> String {
        REQUIRED_TOOL_SECTIONS
            .iter()
            .map(|s| format!("[{}]\n", s))
            .collect()
    }

    fn run(
        project: &Path,
        templates: &Path,
        runner: &MockRunner,
    ) -> (Result<SetupReport, AppError>, String) {
        let setup = RepoSetup::new(SetupConfig::new(project, templates), runner);
        let mut out: Vec<u8> = Vec::new();
        let result = setup.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_not_a_repository_has_no_side_effects() {
        let project = tempfile::tempdir().unwrap();
        fs::write(project.path().join("pyproject.toml"), complete_manifest()).unwrap();
        let templates = templates();
        let runner = MockRunner::new();

        let (result, out) = run(project.path(), templates.path(), &runner);

        assert!(matches!(
            result,
            Err(AppError::Setup(SetupError::NotARepository { .. }))
        ));
        assert!(out.contains("[!!] Not a git repository"));
        assert!(!project.path().join("scripts").exists());
        assert!(!project.path().join(".github").exists());
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn test_full_setup() {
        let project = repo(Some(&complete_manifest()));
        let templates = templates();
        let runner = MockRunner::new();

        let (result, out) = run(project.path(), templates.path(), &runner);
        let report = result.unwrap();

        assert!(report.is_success());
        assert_eq!(report.installed_hooks, vec!["pre-commit", "pre-push"]);
        assert_eq!(report.hooks_path_configured, Some(true));
        assert!(report.workflow_installed);
        assert_eq!(report.tools.len(), 4);
        assert!(project.path().join("scripts/hooks/pre-commit").is_file());
        assert!(project
            .path()
            .join(".github/workflows/quality.yml")
            .is_file());

        assert!(out.contains("[OK] pyproject.toml has all required tool sections"));
        assert!(out.contains("[OK] Copied pre-commit to scripts/hooks/"));
        assert!(out.contains("[OK] Configured git to use scripts/hooks/"));
        assert!(out.contains("[OK] Copied quality.yml to .github/workflows/"));
        assert!(out.contains("Repository is configured with quality guardrails:"));

        let programs: Vec<String> = runner.calls().iter().map(|c| c.program_name()).collect();
        assert_eq!(programs[0], "git");
        assert_eq!(programs.len(), 5);
    }

    #[test]
    fn test_missing_sections_skips_install_but_checks_tools() {
        let project = repo(Some("[tool.black]\n[tool.flake8]\n"));
        let templates = templates();
        let runner = MockRunner::new().respond("vulture", ProcessOutput::new(Some(1), "", ""));

        let (result, out) = run(project.path(), templates.path(), &runner);
        let report = result.unwrap();

        assert!(!report.is_success());
        assert_eq!(
            report.manifest,
            ManifestCheck::MissingSections(vec![
                "tool.bandit".to_string(),
                "tool.vulture".to_string(),
                "tool.pytest".to_string(),
            ])
        );
        assert_eq!(report.hooks_path_configured, None);
        assert!(!report.workflow_installed);
        assert!(!project.path().join("scripts").exists());
        assert!(!project.path().join(".github").exists());

        assert!(out.contains("[!!] Missing sections: tool.bandit, tool.vulture, tool.pytest"));
        assert_eq!(out.matches(SKIP_MESSAGE).count(), 2);
        assert!(out.contains("[!!] vulture not found - install with: pipx install vulture"));
        assert!(out.contains("Action required"));

        // Only the four tool lookups ran
        assert_eq!(runner.last_args(), vec!["black", "flake8", "bandit", "vulture"]);
    }

    #[test]
    fn test_missing_manifest() {
        let project = repo(None);
        let templates = templates();
        let runner = MockRunner::new();

        let (result, out) = run(project.path(), templates.path(), &runner);

        assert_eq!(result.unwrap().manifest, ManifestCheck::NotFound);
        assert!(out.contains("[!!] pyproject.toml not found"));
        assert!(out.contains("Run /python-pyproject skill to create it first"));
    }

    #[test]
    fn test_unreadable_manifest_skips_install_but_checks_tools() {
        let project = repo(None);
        fs::create_dir(project.path().join("pyproject.toml")).unwrap();
        let templates = templates();
        let runner = MockRunner::new();

        let (result, out) = run(project.path(), templates.path(), &runner);
        let report = result.unwrap();

        assert!(matches!(report.manifest, ManifestCheck::Unreadable(_)));
        assert!(!report.is_success());
        assert_eq!(report.hooks_path_configured, None);
        assert!(!report.workflow_installed);
        assert!(!project.path().join("scripts").exists());
        assert!(!project.path().join(".github").exists());

        assert!(out.contains("[!!] Failed to read pyproject.toml"));
        assert_eq!(out.matches(SKIP_MESSAGE).count(), 2);
        assert!(out.contains("Action required"));
        assert_eq!(runner.last_args(), vec!["black", "flake8", "bandit", "vulture"]);
    }

    #[test]
    fn test_git_config_failure_is_not_fatal() {
        let project = repo(Some(&complete_manifest()));
        let templates = templates();
        let runner = MockRunner::new().respond(
            HOOKS_DIR,
            ProcessOutput::new(Some(128), "", "fatal: not in a git directory"),
        );

        let (result, out) = run(project.path(), templates.path(), &runner);
        let report = result.unwrap();

        assert!(report.is_success());
        assert_eq!(report.hooks_path_configured, Some(false));
        assert!(report.workflow_installed);
        assert!(out.contains("[!!] Failed to configure git: fatal: not in a git directory"));
    }

    #[test]
    fn test_missing_templates_is_an_error() {
        let project = repo(Some(&complete_manifest()));
        let empty = tempfile::tempdir().unwrap();
        let runner = MockRunner::new();

        let (result, _) = run(project.path(), empty.path(), &runner);

        assert!(matches!(
            result,
            Err(AppError::Setup(SetupError::TemplateNotFound { .. }))
        ));
    }
}
