//! Error types for Shipshape operations.
//!
//! This module defines [`ShipshapeError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ShipshapeError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ShipshapeError::Other`) for unexpected errors
//! - Check-internal errors never surface here; each check converts them into
//!   failed report details at its own boundary

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Shipshape operations.
#[derive(Debug, Error)]
pub enum ShipshapeError {
    /// Failed to parse the checklist override file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Shipshape operations.
pub type Result<T> = std::result::Result<T, ShipshapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ShipshapeError::ConfigParseError {
            path: PathBuf::from("/project/shipshape.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/project/shipshape.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ShipshapeError = io_err.into();
        assert!(matches!(err, ShipshapeError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_transparently() {
        let err: ShipshapeError = anyhow::anyhow!("unexpected").into();
        assert!(err.to_string().contains("unexpected"));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ShipshapeError::ConfigParseError {
                path: PathBuf::from("shipshape.yml"),
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
