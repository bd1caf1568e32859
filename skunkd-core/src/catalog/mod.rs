//! Capability catalog loading.

pub mod schema;

use std::fs;
use std::path::Path;

use crate::error::CatalogError;
pub use schema::{Capability, Catalog, Category, SessionSummary, UnknownCategory};

impl Catalog {
    /// Parse a catalog document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a
    /// record carries an unknown category.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse a catalog document from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Read` if the file cannot be read and
    /// `CatalogError::Parse` if it is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|e| CatalogError::parse(path, &e))
    }

    /// Number of capability records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"{
        "capabilities": [
            {"name": "grep", "category": "tool", "description": "Search files"},
            {"name": "git:commit", "category": "skill", "description": "Commit", "namespace": "git"},
            {"name": "search", "category": "mcp_tool", "description": "Web search", "server": "web"}
        ],
        "session_summary": {"total": 3}
    }"#;

    #[test]
    fn from_json_parses_records() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.session_summary.total, 3);
        assert_eq!(catalog.capabilities[1].category, Category::Skill);
        assert_eq!(catalog.capabilities[2].server.as_deref(), Some("web"));
    }

    #[test]
    fn missing_summary_is_an_error() {
        let json = r#"{"capabilities": []}"#;
        assert!(Catalog::from_json(json).is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = Catalog::load(Path::new("/nonexistent/skunkd/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }

    #[test]
    fn load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = Catalog::load(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::load(file.path()).unwrap();
        assert!(!catalog.is_empty());
    }
}
