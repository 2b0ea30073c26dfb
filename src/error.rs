//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with reading or parsing pyproject.toml
//! - UpgradeError: Missing preconditions for the dependency upgrader
//! - SetupError: Repository scaffolding failures
//! - Output: Writing status lines to stdout failed

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Dependency upgrade related errors
    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    /// Repository setup related errors
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// Failed to write user-facing output
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("{path} not found")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },
}

/// Errors that prevent the upgrader from starting
#[derive(Error, Debug)]
pub enum UpgradeError {
    /// The installer executable does not exist
    #[error("{path} not found")]
    InstallerNotFound { path: PathBuf },
}

/// Errors raised while scaffolding a repository
#[derive(Error, Debug)]
pub enum SetupError {
    /// Target directory has no `.git`
    #[error("not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// A template file or directory is missing
    #[error("template not found: {path}")]
    TemplateNotFound { path: PathBuf },

    /// Failed to create a destination directory
    #[error("failed to create directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a template into place
    #[error("failed to copy {from} to {to}: {source}")]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to adjust permissions or timestamps on a copied file
    #[error("failed to set attributes on {path}: {source}")]
    PermissionError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl UpgradeError {
    /// Creates a new InstallerNotFound error
    pub fn installer_not_found(path: impl Into<PathBuf>) -> Self {
        UpgradeError::InstallerNotFound { path: path.into() }
    }
}

impl SetupError {
    /// Creates a new TemplateNotFound error
    pub fn template_not_found(path: impl Into<PathBuf>) -> Self {
        SetupError::TemplateNotFound { path: path.into() }
    }

    /// Creates a new CreateDirError
    pub fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::CreateDirError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new CopyError
    pub fn copy_error(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        SetupError::CopyError {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Creates a new PermissionError
    pub fn permission_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SetupError::PermissionError {
            path: path.into(),
            source,
        }
    }
}
