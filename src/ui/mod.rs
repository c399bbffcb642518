//! Terminal output components.
//!
//! This module provides:
//! - [`ShipshapeTheme`] for colored and plain styling
//! - [`StatusKind`] as the canonical status icon vocabulary
//! - [`OutputMode`] for report verbosity
//! - [`SummaryTable`] for the per-check summary

pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::StatusKind;
pub use output::OutputMode;
pub use table::SummaryTable;
pub use theme::{should_use_colors, ShipshapeTheme};
