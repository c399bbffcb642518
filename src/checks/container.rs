//! Container build file check.

use std::fs;
use std::path::{Path, PathBuf};

use super::Check;
use crate::report::{CheckDetail, CheckResult};

/// Verifies the container build file exists and has content.
///
/// Once the file is non-empty this check never fails; the marker tokens
/// only decide between a positive message and an incompleteness warning.
pub struct ContainerFileCheck {
    path: PathBuf,
    base_image_marker: String,
    run_command_marker: String,
}

impl ContainerFileCheck {
    /// Create the check for the given file and marker tokens.
    pub fn new(path: PathBuf, base_image_marker: &str, run_command_marker: &str) -> Self {
        Self {
            path,
            base_image_marker: base_image_marker.to_string(),
            run_command_marker: run_command_marker.to_string(),
        }
    }
}

impl Check for ContainerFileCheck {
    fn name(&self) -> &'static str {
        "Container file"
    }

    fn run(&self, project_root: &Path) -> CheckResult {
        let full = project_root.join(&self.path);
        if !full.exists() {
            return CheckResult::new(
                self.name(),
                false,
                vec![CheckDetail::error(format!(
                    "{} is missing",
                    self.path.display()
                ))],
            );
        }

        let text = match fs::read_to_string(&full) {
            Ok(text) => text,
            Err(e) => {
                return CheckResult::new(
                    self.name(),
                    false,
                    vec![CheckDetail::error(format!(
                        "{} could not be read: {}",
                        self.path.display(),
                        e
                    ))],
                );
            }
        };

        if text.trim().is_empty() {
            return CheckResult::new(
                self.name(),
                false,
                vec![CheckDetail::error(format!(
                    "{} is empty",
                    self.path.display()
                ))],
            );
        }

        let detail = if text.contains(&self.base_image_marker)
            && text.contains(&self.run_command_marker)
        {
            CheckDetail::ok(format!("{} looks complete", self.path.display()))
        } else {
            CheckDetail::warning(format!(
                "{} exists but may be incomplete (expected {} and {} directives)",
                self.path.display(),
                self.base_image_marker,
                self.run_command_marker
            ))
        };

        CheckResult::new(self.name(), true, vec![detail])
    }
}
