//! CLI argument definitions and the verify command.
//!
//! The CLI surface is a single command: invoking `shipshape` runs the
//! full checklist against the project directory and exits 0 only when
//! every check passed.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::checks::ChecklistRunner;
use crate::config;
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter};
use crate::ui::{should_use_colors, OutputMode};

/// Shipshape - project scaffolding verification.
#[derive(Debug, Parser)]
#[command(name = "shipshape")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the project directory to verify (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Only print the summary table and verdict
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The checklist verification command.
pub struct VerifyCommand {
    project_root: PathBuf,
    json: bool,
    mode: OutputMode,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, json: bool, mode: OutputMode) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            json,
            mode,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Run the checklist and print the report to stdout.
    pub fn execute(&self) -> Result<CommandResult> {
        let config = config::load(&self.project_root)?;
        let runner = ChecklistRunner::new(&self.project_root, &config);
        let report = runner.run_all();

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if self.json {
            JsonFormatter::new().format(&report, &mut out)?;
            writeln!(out)?;
        } else {
            HumanFormatter::new(should_use_colors(), self.mode).format(&report, &mut out)?;
        }

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
