//! Error types for the Durak library.
//!
//! Text operations in Durak are total: normalizing, tokenizing, stripping and
//! looking up words never fail on well-formed input. Errors only arise while
//! building components (invalid configuration, malformed resource data) and
//! at the command line boundary (I/O, JSON output).
//!
//! # Examples
//!
//! ```
//! use durak::error::{DurakError, Result};
//!
//! fn check_min_root_length(len: usize) -> Result<()> {
//!     if len == 0 {
//!         return Err(DurakError::configuration("min_root_length must be at least 1"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_min_root_length(0).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Durak operations.
#[derive(Error, Debug)]
pub enum DurakError {
    /// Invalid strategy name or out-of-range parameter, raised before any
    /// processing begins.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed externally supplied resource data.
    #[error("Resource error: {0}")]
    Resource(String),

    /// I/O errors (stdin reading in the CLI)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DurakError.
pub type Result<T> = std::result::Result<T, DurakError>;

impl DurakError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        DurakError::Configuration(msg.into())
    }

    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        DurakError::Resource(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DurakError::Other(msg.into())
    }

    /// Check whether this error was caused by invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, DurakError::Configuration(_))
    }

    /// Check whether this error was caused by malformed resource data.
    pub fn is_resource(&self) -> bool {
        matches!(self, DurakError::Resource(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = DurakError::configuration("unknown strategy 'fuzzy'");
        assert_eq!(
            error.to_string(),
            "Configuration error: unknown strategy 'fuzzy'"
        );
        assert!(error.is_configuration());

        let error = DurakError::resource("empty suffix surface");
        assert_eq!(error.to_string(), "Resource error: empty suffix surface");
        assert!(error.is_resource());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed");
        let durak_error = DurakError::from(io_error);

        match durak_error {
            DurakError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
