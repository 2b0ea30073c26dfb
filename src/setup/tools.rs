//! Local tool availability checks

use crate::config::LOCATE_COMMAND;
use crate::process::{CommandSpec, ProcessRunner};

/// Whether a tool was found on PATH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolStatus {
    /// Tool name
    pub name: String,
    /// Resolved location when the locate command succeeded
    pub path: Option<String>,
}

impl ToolStatus {
    /// Returns true if the tool was found
    pub fn is_available(&self) -> bool {
        self.path.is_some()
    }

    /// Suggested install command
    pub fn install_hint(&self) -> String {
        format!("pipx install {}", self.name)
    }
}

/// Locate a single tool with `which` (or `where` on Windows)
pub fn locate_tool<R: ProcessRunner>(runner: &R, name: &str) -> ToolStatus {
    let command = CommandSpec::new(LOCATE_COMMAND).args([name]);
    let path = match runner.run(&command) {
        Ok(output) if output.success() => Some(
            output
                .stdout
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .unwrap_or_default()
                .to_string(),
        ),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(tool = name, error = %e, "locate command failed");
            None
        }
    };
    ToolStatus {
        name: name.to_string(),
        path,
    }
}

/// Locate every tool in order
pub fn check_tools<R: ProcessRunner>(runner: &R, tools: &[&str]) -> Vec<ToolStatus> {
    tools.iter().map(|tool| locate_tool(runner, tool)).collect()
}
