//! Shipshape - project scaffolding verification for CI/CD readiness.
//!
//! Shipshape runs an ordered checklist of independent verification steps
//! against a project directory: the expected files exist, Rust sources
//! parse, CI workflows are valid YAML, the container build file looks
//! complete, and the dependency manifest has content. It prints a
//! per-check report plus a summary table and exits 0 only when every
//! check passed.
//!
//! # Modules
//!
//! - [`checks`] - The `Check` trait, the built-in checks, and the runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Checklist configuration and override loading
//! - [`error`] - Error types and result aliases
//! - [`report`] - Check results, the report, and its formatters
//! - [`ui`] - Terminal theme, status icons, and output modes
//! - [`yaml`] - Optional YAML parsing capability
//!
//! # Example
//!
//! ```
//! use shipshape::report::{CheckDetail, CheckResult, ChecklistReport};
//!
//! let mut report = ChecklistReport::new();
//! report.push(CheckResult::new(
//!     "Files",
//!     true,
//!     vec![CheckDetail::ok("src/main.rs exists")],
//! ));
//! assert!(report.passed());
//! assert_eq!(report.exit_code(), 0);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;
pub mod yaml;

pub use error::{Result, ShipshapeError};
