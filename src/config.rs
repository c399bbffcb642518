//! Checklist configuration.
//!
//! [`ChecklistConfig`] names every path the checklist inspects. The
//! defaults follow the conventional Cargo layout; a `shipshape.yml` at
//! the project root overrides individual fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Name of the optional override file at the project root.
pub const CONFIG_FILE: &str = "shipshape.yml";

/// Named configuration for the checklist: which paths each check inspects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChecklistConfig {
    /// Files whose presence the Files check requires.
    pub required_files: Vec<PathBuf>,

    /// Rust sources the syntax check parses.
    pub source_files: Vec<PathBuf>,

    /// CI workflow documents the Workflows check parses.
    pub workflow_files: Vec<PathBuf>,

    /// Container build file inspected by the Container file check.
    pub container_file: PathBuf,

    /// Dependency manifest inspected by the Manifest check.
    pub manifest_file: PathBuf,

    /// Marker token for the container base-image directive.
    pub base_image_marker: String,

    /// Marker token for the container run-command directive.
    pub run_command_marker: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            required_files: vec![
                PathBuf::from("src/main.rs"),
                PathBuf::from("tests/app.rs"),
                PathBuf::from("Cargo.toml"),
                PathBuf::from("Dockerfile"),
            ],
            source_files: vec![PathBuf::from("src/main.rs"), PathBuf::from("tests/app.rs")],
            workflow_files: vec![
                PathBuf::from(".github/workflows/ci.yml"),
                PathBuf::from(".github/workflows/build-image.yml"),
            ],
            container_file: PathBuf::from("Dockerfile"),
            manifest_file: PathBuf::from("Cargo.toml"),
            base_image_marker: "FROM".to_string(),
            run_command_marker: "CMD".to_string(),
        }
    }
}

/// Load the checklist configuration for a project.
///
/// Starts from the defaults; when `shipshape.yml` is present at the
/// project root it is deserialized over them, so partial overrides keep
/// the remaining defaults. A malformed override fails the run.
pub fn load(project_root: &Path) -> Result<ChecklistConfig> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ChecklistConfig::default());
    }
    load_override(&path)
}

#[cfg(feature = "yaml")]
fn load_override(path: &Path) -> Result<ChecklistConfig> {
    let text = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|e| crate::error::ShipshapeError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(not(feature = "yaml"))]
fn load_override(path: &Path) -> Result<ChecklistConfig> {
    tracing::warn!(
        "{} present but YAML support is not compiled in; using defaults",
        path.display()
    );
    Ok(ChecklistConfig::default())
}
