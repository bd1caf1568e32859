//! Core error types for `skunkd`
//!
//! Catalog loading errors shared across the workspace.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog loading errors.
///
/// Both variants are fatal: the catalog builder never attempts partial
/// output when its input cannot be read.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path to the catalog file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not a valid catalog document
    #[error("parse error in {path}{}: {message}", line.map_or_else(String::new, |l| format!(" (line {l})")))]
    Parse {
        /// Path to the catalog file
        path: PathBuf,
        /// Line number where the error occurred (if available)
        line: Option<usize>,
        /// Error message from the parser
        message: String,
    },
}

impl CatalogError {
    /// Build a parse error from a `serde_json` failure.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, err: &serde_json::Error) -> Self {
        let line = (err.line() > 0).then_some(err.line());
        Self::Parse {
            path: path.into(),
            line,
            message: err.to_string(),
        }
    }
}
