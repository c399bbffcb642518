//! File presence check.

use std::path::{Path, PathBuf};

use super::Check;
use crate::report::{CheckDetail, CheckResult};

/// Verifies that the expected project files exist.
///
/// A missing file is a normal outcome reported as a failure, never an
/// error that propagates.
pub struct FilesCheck {
    paths: Vec<PathBuf>,
}

impl FilesCheck {
    /// Create the check for the given required paths.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Check for FilesCheck {
    fn name(&self) -> &'static str {
        "Files"
    }

    fn run(&self, project_root: &Path) -> CheckResult {
        let mut details = Vec::new();
        let mut passed = true;

        for path in &self.paths {
            if project_root.join(path).exists() {
                details.push(CheckDetail::ok(format!("{} exists", path.display())));
            } else {
                details.push(CheckDetail::error(format!("{} is missing", path.display())));
                passed = false;
            }
        }

        CheckResult::new(self.name(), passed, details)
    }
}
