//! pyproject.toml parser for Python projects
//!
//! Handles:
//! - project.dependencies (PEP 621)
//! - project.optional-dependencies (PEP 621), every group flattened together

use crate::domain::CollectedDependencies;
use crate::error::ManifestError;
use crate::parser::parse_package_name;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct RawPyproject {
    #[serde(default)]
    project: RawProject,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawProject {
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    optional_dependencies: toml::Table,
}

/// Dependency declarations read from a pyproject.toml
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pyproject {
    /// `[project].dependencies`
    pub dependencies: Vec<String>,
    /// `[project.optional-dependencies]` groups in document order
    pub optional_dependencies: Vec<(String, Vec<String>)>,
}

impl Pyproject {
    /// Parse manifest content; `path` is only used for error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let raw: RawPyproject = toml::from_str(content)
            .map_err(|e| ManifestError::toml_parse_error(path, e.to_string()))?;

        let mut optional_dependencies = Vec::new();
        for (group, value) in raw.project.optional_dependencies {
            let declarations = value
                .as_array()
                .and_then(|items| {
                    items
                        .iter()
                        .map(|item| item.as_str().map(str::to_string))
                        .collect::<Option<Vec<_>>>()
                })
                .ok_or_else(|| {
                    ManifestError::toml_parse_error(
                        path,
                        format!("optional-dependencies.{group} must be an array of strings"),
                    )
                })?;
            optional_dependencies.push((group, declarations));
        }

        Ok(Self {
            dependencies: raw.project.dependencies,
            optional_dependencies,
        })
    }

    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::not_found(path));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
        Self::parse(&content, path)
    }

    /// All declarations: main list first, then each optional group
    pub fn declarations(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str).chain(
            self.optional_dependencies
                .iter()
                .flat_map(|(_, deps)| deps.iter().map(String::as_str)),
        )
    }
}

/// Collect upgradeable package names and skipped declarations
pub fn collect_dependencies(pyproject: &Pyproject) -> CollectedDependencies {
    let mut collected = CollectedDependencies::new();
    for declaration in pyproject.declarations() {
        match parse_package_name(declaration) {
            Some(name) => collected.add_package(name),
            None => collected.add_skipped(declaration),
        }
    }
    collected
}
