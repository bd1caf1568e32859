//! Error types for `skunkd` page and chart generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing generated pages.
#[derive(Debug, Error)]
pub enum DocsError {
    /// A generated file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A chart name did not match any registered chart.
    #[error("unknown chart '{name}'{}", suggestion.as_ref().map_or_else(String::new, |s| format!(" (did you mean '{s}'?)")))]
    UnknownChart {
        /// Name as given.
        name: String,
        /// Closest registered chart name, if any.
        suggestion: Option<String>,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
