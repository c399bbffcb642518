//! Workflow manifest syntax check.

use std::fs;
use std::path::{Path, PathBuf};

use super::Check;
use crate::report::{CheckDetail, CheckResult};
use crate::yaml;

/// Verifies that each CI workflow file exists and parses as YAML.
///
/// When YAML support is compiled out, the whole check short-circuits to
/// a single warning outcome instead of attempting per-file work.
pub struct WorkflowsCheck {
    paths: Vec<PathBuf>,
}

impl WorkflowsCheck {
    /// Create the check for the given workflow files.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Check for WorkflowsCheck {
    fn name(&self) -> &'static str {
        "Workflows"
    }

    fn run(&self, project_root: &Path) -> CheckResult {
        if !yaml::supported() {
            return CheckResult::new(
                self.name(),
                false,
                vec![CheckDetail::warning(yaml::INSTALL_HINT)],
            );
        }

        let mut details = Vec::new();
        let mut passed = true;

        for path in &self.paths {
            let full = project_root.join(path);
            if !full.exists() {
                details.push(CheckDetail::error(format!("{} is missing", path.display())));
                passed = false;
                continue;
            }

            match fs::read_to_string(&full) {
                Ok(text) => match yaml::parse(&text) {
                    Ok(_) => {
                        details.push(CheckDetail::ok(format!("{} is valid YAML", path.display())));
                    }
                    Err(message) => {
                        details.push(CheckDetail::error(format!(
                            "{} has a YAML error: {}",
                            path.display(),
                            message
                        )));
                        passed = false;
                    }
                },
                Err(e) => {
                    details.push(CheckDetail::error(format!(
                        "{} could not be read: {}",
                        path.display(),
                        e
                    )));
                    passed = false;
                }
            }
        }

        CheckResult::new(self.name(), passed, details)
    }
}
