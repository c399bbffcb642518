//! Source syntax check.

use std::fs;
use std::path::{Path, PathBuf};

use super::Check;
use crate::report::{CheckDetail, CheckResult};

/// Verifies that each listed source file parses as valid Rust.
///
/// A syntax-only pass: files are parsed with `syn`, never compiled or
/// executed. Parse failures and read failures are reported with
/// different detail, and both fail the check without aborting it.
pub struct SourceSyntaxCheck {
    paths: Vec<PathBuf>,
}

impl SourceSyntaxCheck {
    /// Create the check for the given source files.
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Check for SourceSyntaxCheck {
    fn name(&self) -> &'static str {
        "Source syntax"
    }

    fn run(&self, project_root: &Path) -> CheckResult {
        let mut details = Vec::new();
        let mut passed = true;

        for path in &self.paths {
            match fs::read_to_string(project_root.join(path)) {
                Ok(text) => match syn::parse_file(&text) {
                    Ok(_) => {
                        details.push(CheckDetail::ok(format!("{} parses cleanly", path.display())));
                    }
                    Err(e) => {
                        details.push(CheckDetail::error(format!(
                            "{} has a syntax error: {}",
                            path.display(),
                            e
                        )));
                        passed = false;
                    }
                },
                Err(e) => {
                    details.push(CheckDetail::error(format!(
                        "{} could not be checked: {}",
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
