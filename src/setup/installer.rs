//! Template installation: git hooks and the CI workflow

use crate::config::HOOKS_DIR;
use crate::error::SetupError;
use crate::process::{CommandSpec, ProcessRunner};
use std::fs;
use std::path::{Path, PathBuf};

/// Copy every file in `src_dir` into `dest_dir` and mark it executable.
///
/// Returns the copied file names in sorted order.
pub fn install_hooks(src_dir: &Path, dest_dir: &Path) -> Result<Vec<String>, SetupError> {
    if !src_dir.is_dir() {
        return Err(SetupError::template_not_found(src_dir));
    }
    fs::create_dir_all(dest_dir).map_err(|e| SetupError::create_dir_error(dest_dir, e))?;

    let entries =
        fs::read_dir(src_dir).map_err(|e| SetupError::copy_error(src_dir, dest_dir, e))?;
    let mut hooks: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| SetupError::copy_error(src_dir, dest_dir, e))?
            .path();
        if path.is_file() {
            hooks.push(path);
        }
    }
    hooks.sort();

    let mut copied = Vec::with_capacity(hooks.len());
    for hook in hooks {
        let Some(name) = hook.file_name() else {
            continue;
        };
        let dest = dest_dir.join(name);
        copy_preserving(&hook, &dest)?;
        make_executable(&dest)?;
        tracing::debug!(from = %hook.display(), to = %dest.display(), "installed hook");
        copied.push(name.to_string_lossy().into_owned());
    }
    Ok(copied)
}

/// Copy the workflow template into `dest_dir`, returning the written path
pub fn install_workflow(template: &Path, dest_dir: &Path) -> Result<PathBuf, SetupError> {
    if !template.is_file() {
        return Err(SetupError::template_not_found(template));
    }
    let name = template
        .file_name()
        .ok_or_else(|| SetupError::template_not_found(template))?;

    fs::create_dir_all(dest_dir).map_err(|e| SetupError::create_dir_error(dest_dir, e))?;
    let dest = dest_dir.join(name);
    copy_preserving(template, &dest)?;
    tracing::debug!(to = %dest.display(), "installed workflow");
    Ok(dest)
}

/// `git config core.hooksPath scripts/hooks`, run inside the project
pub fn hooks_path_command(project: &Path) -> CommandSpec {
    CommandSpec::new("git")
        .args(["config", "core.hooksPath", HOOKS_DIR])
        .current_dir(project)
}

/// Point git at the installed hooks; `Err` carries git's stderr
pub fn configure_hooks_path<R: ProcessRunner>(runner: &R, project: &Path) -> Result<(), String> {
    let command = hooks_path_command(project);
    match runner.run(&command) {
        Ok(output) if output.success() => Ok(()),
        Ok(output) => Err(output.stderr.trim().to_string()),
        Err(e) => Err(format!("failed to execute git: {}", e)),
    }
}

// Copies contents and permissions, then carries over the modification time
fn copy_preserving(from: &Path, to: &Path) -> Result<(), SetupError> {
    // A read-only copy left by an earlier run cannot be overwritten in place
    if fs::metadata(to).is_ok_and(|m| m.permissions().readonly()) {
        fs::remove_file(to).map_err(|e| SetupError::copy_error(from, to, e))?;
    }
    fs::copy(from, to).map_err(|e| SetupError::copy_error(from, to, e))?;

    if let Ok(modified) = fs::metadata(from).and_then(|m| m.modified()) {
        open_for_times(to)
            .and_then(|file| file.set_modified(modified))
            .map_err(|e| SetupError::permission_error(to, e))?;
    }
    Ok(())
}

// Setting times only needs ownership on unix, so a read-only copy still works
#[cfg(unix)]
fn open_for_times(path: &Path) -> std::io::Result<fs::File> {
    fs::File::open(path)
}

#[cfg(not(unix))]
fn open_for_times(path: &Path) -> std::io::Result<fs::File> {
    fs::File::options().write(true).open(path)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<(), SetupError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| SetupError::permission_error(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<(), SetupError> {
    Ok(())
}
