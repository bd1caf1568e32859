//! Error types for `skunkd`
//!
//! Aggregates the library crates' errors and maps each one to a process
//! exit code.

use std::path::PathBuf;
use thiserror::Error;

use skunkd_core::error::CatalogError;
use skunkd_docs::error::DocsError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `skunkd` CLI operations.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Invalid input (malformed catalog JSON, validation failure)
    pub const INVALID_INPUT: i32 = 2;

    /// I/O error (file not found, permission denied, write failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown chart name)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `skunkd` commands.
#[derive(Debug, Error)]
pub enum SkunkdError {
    /// Catalog could not be read or parsed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Page or chart rendering/writing failed
    #[error(transparent)]
    Docs(#[from] DocsError),

    /// `catalog validate` found problems
    #[error("{errors} error(s), {warnings} warning(s) in {path}")]
    Validation {
        /// Catalog that was validated
        path: PathBuf,
        /// Error-severity findings
        errors: usize,
        /// Warning-severity findings counted as failures (strict mode)
        warnings: usize,
    },

    /// At least one chart could not be written
    #[error("{failed} of {total} charts failed")]
    ChartsFailed {
        /// Charts that failed
        failed: usize,
        /// Charts attempted
        total: usize,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SkunkdError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Catalog(CatalogError::Read { .. })
            | Self::Docs(DocsError::Write { .. } | DocsError::CreateDir { .. })
            | Self::ChartsFailed { .. } => ExitCode::IO_ERROR,
            Self::Catalog(CatalogError::Parse { .. }) | Self::Validation { .. } => {
                ExitCode::INVALID_INPUT
            }
            Self::Docs(DocsError::UnknownChart { .. }) => ExitCode::USAGE_ERROR,
            Self::Docs(DocsError::Json(_)) | Self::Json(_) => ExitCode::ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone")
    }

    #[test]
    fn test_read_failure_is_io() {
        let err = SkunkdError::from(CatalogError::Read {
            path: "catalog.json".into(),
            source: io_error(),
        });
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
        assert_eq!(err.to_string(), "failed to read catalog.json: gone");
    }

    #[test]
    fn test_parse_failure_is_invalid_input() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SkunkdError::from(CatalogError::parse("catalog.json", &json_err));
        assert_eq!(err.exit_code(), ExitCode::INVALID_INPUT);
    }

    #[test]
    fn test_unknown_chart_is_usage() {
        let err = SkunkdError::from(DocsError::UnknownChart {
            name: "x".into(),
            suggestion: None,
        });
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }

    #[test]
    fn test_write_failure_is_io() {
        let err = SkunkdError::from(DocsError::Write {
            path: "out.html".into(),
            source: io_error(),
        });
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_validation_and_chart_failures() {
        let err = SkunkdError::Validation {
            path: "c.json".into(),
            errors: 2,
            warnings: 0,
        };
        assert_eq!(err.exit_code(), ExitCode::INVALID_INPUT);
        assert_eq!(err.to_string(), "2 error(s), 0 warning(s) in c.json");

        let err = SkunkdError::ChartsFailed {
            failed: 1,
            total: 6,
        };
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
        assert_eq!(err.to_string(), "1 of 6 charts failed");
    }
}
