//! Dependency manifest check.

use std::fs;
use std::path::{Path, PathBuf};

use super::Check;
use crate::report::{CheckDetail, CheckResult};

/// Verifies the dependency manifest exists and has content, echoing the
/// trimmed content into the report for operator visibility.
pub struct ManifestCheck {
    path: PathBuf,
}

impl ManifestCheck {
    /// Create the check for the given manifest file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Check for ManifestCheck {
    fn name(&self) -> &'static str {
        "Manifest"
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

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return CheckResult::new(
                self.name(),
                false,
                vec![CheckDetail::error(format!(
                    "{} is empty",
                    self.path.display()
                ))],
            );
        }

        let mut details = vec![CheckDetail::ok(format!(
            "{} contains:",
            self.path.display()
        ))];
        details.extend(trimmed.lines().map(CheckDetail::info));

        CheckResult::new(self.name(), true, details)
    }
}
