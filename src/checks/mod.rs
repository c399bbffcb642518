//! The verification checklist.
//!
//! Each verification step implements [`Check`]: a pure function of the
//! filesystem state producing a [`CheckResult`]. The [`ChecklistRunner`]
//! invokes every check in a fixed order and never aborts early, so the
//! report always covers the full checklist.

pub mod container;
pub mod files;
pub mod manifest;
pub mod source;
pub mod workflows;

pub use container::ContainerFileCheck;
pub use files::FilesCheck;
pub use manifest::ManifestCheck;
pub use source::SourceSyntaxCheck;
pub use workflows::WorkflowsCheck;

use std::path::{Path, PathBuf};

use crate::config::ChecklistConfig;
use crate::report::{CheckResult, ChecklistReport};

/// A single verification step.
///
/// Checks are independent: they share no state and a failure in one
/// never prevents another from running. Implementations convert every
/// internal error into a failed detail; `run` itself cannot fail.
pub trait Check {
    /// Display name used in the report and summary table.
    fn name(&self) -> &'static str;

    /// Run the check against the project directory.
    fn run(&self, project_root: &Path) -> CheckResult;
}

/// Runs the checklist in its fixed order.
pub struct ChecklistRunner {
    project_root: PathBuf,
    checks: Vec<Box<dyn Check>>,
}

impl ChecklistRunner {
    /// Build the five built-in checks from the configuration.
    ///
    /// Order is fixed: Files, Source syntax, Workflows, Container file,
    /// Manifest.
    pub fn new(project_root: &Path, config: &ChecklistConfig) -> Self {
        let checks: Vec<Box<dyn Check>> = vec![
            Box::new(FilesCheck::new(config.required_files.clone())),
            Box::new(SourceSyntaxCheck::new(config.source_files.clone())),
            Box::new(WorkflowsCheck::new(config.workflow_files.clone())),
            Box::new(ContainerFileCheck::new(
                config.container_file.clone(),
                &config.base_image_marker,
                &config.run_command_marker,
            )),
            Box::new(ManifestCheck::new(config.manifest_file.clone())),
        ];

        Self {
            project_root: project_root.to_path_buf(),
            checks,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run every check and collect the report.
    pub fn run_all(&self) -> ChecklistReport {
        let mut report = ChecklistReport::new();
        for check in &self.checks {
            tracing::debug!("running check: {}", check.name());
            report.push(check.run(&self.project_root));
        }
        report
    }
}
