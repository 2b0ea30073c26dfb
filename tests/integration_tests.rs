//! Integration tests for python-toolkit
//!
//! These tests verify:
//! - Dependency collection from realistic pyproject.toml files
//! - Upgrade ordering, failure isolation and repeatability
//! - Repository setup validation and short-circuiting

use python_toolkit::config::{SetupConfig, UpgradeConfig, REQUIRED_TOOL_SECTIONS};
use python_toolkit::error::{AppError, SetupError};
use python_toolkit::manifest::{collect_dependencies, Pyproject};
use python_toolkit::process::{CommandSpec, ProcessOutput, ProcessRunner};
use python_toolkit::setup::{ManifestCheck, RepoSetup};
use python_toolkit::upgrade::Upgrader;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Runner that records commands and fails for the listed packages
#[derive(Default)]
struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    failing: Vec<&'static str>,
}

impl RecordingRunner {
    fn failing(packages: &[&'static str]) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: packages.to_vec(),
        }
    }

    fn targets(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| c.args.last().cloned())
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> std::io::Result<ProcessOutput> {
        self.calls.borrow_mut().push(command.clone());
        let target = command.args.last().map(String::as_str).unwrap_or_default();
        if self.failing.iter().any(|p| *p == target) {
            Ok(ProcessOutput::new(
                Some(1),
                "",
                format!("ERROR: Could not find a version that satisfies {}\n", target),
            ))
        } else {
            Ok(ProcessOutput::new(Some(0), "", ""))
        }
    }
}

/// Test fixture directory creation helper
fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

fn write_venv_pip(dir: &Path) {
    let bin = dir.join(".venv/bin");
    fs::create_dir_all(&bin).unwrap();
    fs::write(bin.join("pip"), "").unwrap();
}

fn upgrade_config(dir: &Path) -> UpgradeConfig {
    UpgradeConfig::new()
        .with_manifest(dir.join("pyproject.toml"))
        .with_installer(dir.join(".venv/bin/pip"))
}

mod dependency_collection {
    use super::*;

    #[test]
    fn test_realistic_pyproject() {
        let pyproject = r#"[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[project]
name = "service"
version = "1.2.0"
requires-python = ">=3.11"
dependencies = [
    "fastapi>=0.110",
    "uvicorn[standard]>=0.29",
    "pydantic~=2.6",
    "tomli; python_version < '3.11'",
    "internal-lib @ git+https://git.example.com/internal-lib.git@v3",
]

[project.optional-dependencies]
dev = ["pytest>=8", "black", "fastapi"]
docs = ["mkdocs-material==9.5.*"]

[tool.black]
line-length = 100
"#;
        let parsed = Pyproject::parse(pyproject, Path::new("pyproject.toml")).unwrap();
        let collected = collect_dependencies(&parsed);

        let expected: HashSet<String> = [
            "fastapi",
            "uvicorn",
            "pydantic",
            "tomli",
            "pytest",
            "black",
            "mkdocs-material",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(collected.packages, expected);
        assert_eq!(
            collected.skipped,
            vec!["internal-lib @ git+https://git.example.com/internal-lib.git@v3"]
        );
    }

    #[test]
    fn test_manifest_without_dependency_keys() {
        let dir = create_test_dir();
        fs::write(
            dir.path().join("pyproject.toml"),
            "[project]\nname = \"bare\"\n",
        )
        .unwrap();

        let parsed = Pyproject::load(&dir.path().join("pyproject.toml")).unwrap();
        let collected = collect_dependencies(&parsed);
        assert!(collected.packages.is_empty());
        assert!(collected.skipped.is_empty());
    }
}

mod upgrading {
    use super::*;

    const MANIFEST: &str = r#"[project]
name = "demo"
dependencies = ["zeta>=1", "alpha==2.0", "pkg @ git+https://x"]

[project.optional-dependencies]
dev = ["mid", "alpha<3"]
"#;

    fn project() -> TempDir {
        let dir = create_test_dir();
        fs::write(dir.path().join("pyproject.toml"), MANIFEST).unwrap();
        write_venv_pip(dir.path());
        dir
    }

    #[test]
    fn test_upgrades_in_sorted_order_once_each() {
        let dir = project();
        let runner = RecordingRunner::default();
        let upgrader = Upgrader::new(upgrade_config(dir.path()), &runner);

        let report = upgrader.run(&mut std::io::sink()).unwrap();

        assert!(report.is_success());
        assert_eq!(runner.targets(), vec!["alpha", "mid", "zeta"]);
        for call in runner.calls.borrow().iter() {
            assert_eq!(call.args[..2], ["install".to_string(), "--upgrade".to_string()]);
        }
    }

    #[test]
    fn test_failures_are_isolated_and_reported() {
        let dir = project();
        let runner = RecordingRunner::failing(&["alpha"]);
        let upgrader = Upgrader::new(upgrade_config(dir.path()), &runner);
        let mut out: Vec<u8> = Vec::new();

        let report = upgrader.run(&mut out).unwrap();

        assert!(!report.is_success());
        assert_eq!(runner.targets(), vec!["alpha", "mid", "zeta"]);
        assert_eq!(report.summary.upgraded_count(), 2);
        assert_eq!(report.summary.failed_count(), 1);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  alpha ... FAILED\n"));
        assert!(text.contains("  mid ... OK\n"));
        assert!(text.contains("Done: 2 upgraded, 1 failed"));
        assert!(text.contains("  - alpha: ERROR: Could not find a version that satisfies alpha"));
    }

    #[test]
    fn test_repeated_runs_classify_identically() {
        let dir = project();
        let runner = RecordingRunner::failing(&["mid"]);
        let upgrader = Upgrader::new(upgrade_config(dir.path()), &runner);

        let first = upgrader.run(&mut std::io::sink()).unwrap();
        let second = upgrader.run(&mut std::io::sink()).unwrap();

        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_missing_installer_attempts_nothing() {
        let dir = create_test_dir();
        fs::write(dir.path().join("pyproject.toml"), MANIFEST).unwrap();
        let runner = RecordingRunner::default();
        let upgrader = Upgrader::new(upgrade_config(dir.path()), &runner);

        let err = upgrader.run(&mut std::io::sink()).unwrap_err();

        assert!(matches!(err, AppError::Upgrade(_)));
        assert!(runner.targets().is_empty());
    }
}

mod repository_setup {
    use super::*;

    fn templates_dir() -> &'static Path {
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates"))
    }

    fn complete_manifest() -> String {
        let mut content = String::from("[project]\nname = \"demo\"\n\n");
        for section in REQUIRED_TOOL_SECTIONS {
            content.push_str(&format!("[{}]\n", section));
        }
        content
    }

    #[test]
    fn test_shipped_templates_are_installed() {
        let dir = create_test_dir();
        fs::create_dir(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("pyproject.toml"), complete_manifest()).unwrap();
        let runner = RecordingRunner::default();
        let setup = RepoSetup::new(SetupConfig::new(dir.path(), templates_dir()), &runner);

        let report = setup.run(&mut std::io::sink()).unwrap();

        assert!(report.is_success());
        assert_eq!(report.installed_hooks, vec!["pre-commit", "pre-push"]);
        assert_eq!(
            fs::read_to_string(dir.path().join(".github/workflows/quality.yml")).unwrap(),
            fs::read_to_string(templates_dir().join("github/quality.yml")).unwrap()
        );
    }

    #[test]
    fn test_commented_section_header_still_counts() {
        let dir = create_test_dir();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let manifest = complete_manifest().replace("[tool.vulture]", "# [tool.vulture]");
        fs::write(dir.path().join("pyproject.toml"), manifest).unwrap();
        let runner = RecordingRunner::default();
        let setup = RepoSetup::new(SetupConfig::new(dir.path(), templates_dir()), &runner);

        let report = setup.run(&mut std::io::sink()).unwrap();

        assert_eq!(report.manifest, ManifestCheck::Complete);
    }

    #[test]
    fn test_non_repository_short_circuits() {
        let dir = create_test_dir();
        fs::write(dir.path().join("pyproject.toml"), complete_manifest()).unwrap();
        let runner = RecordingRunner::default();
        let setup = RepoSetup::new(SetupConfig::new(dir.path(), templates_dir()), &runner);

        let err = setup.run(&mut std::io::sink()).unwrap_err();

        assert!(matches!(err, AppError::Setup(SetupError::NotARepository { .. })));
        assert!(runner.calls.borrow().is_empty());
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1, "only pyproject.toml should exist");
    }
}
