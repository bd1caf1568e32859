//! Catalog consistency checks.
//!
//! Works on the raw JSON value rather than the typed schema so that a
//! single bad record is reported alongside every other problem instead of
//! aborting the parse.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use skunkd_core::catalog::Category;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The page will render incorrectly or not at all.
    Error,
    /// The page renders, but something looks off.
    Warning,
}

/// A validation finding with its location.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    /// JSON path to the offending value (e.g. `capabilities[3].category`).
    pub path: String,
    /// Human-readable explanation.
    pub message: String,
    /// Finding severity.
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
        };
        write!(f, "{prefix} {}\n  \u{2192} {}", self.path, self.message)
    }
}

impl ValidationIssue {
    fn error(path: String, message: String) -> Self {
        Self {
            path,
            message,
            severity: Severity::Error,
        }
    }

    fn warning(path: String, message: String) -> Self {
        Self {
            path,
            message,
            severity: Severity::Warning,
        }
    }
}

/// Validate a catalog document.
///
/// Returns every finding; an empty list means the catalog is clean.
#[must_use]
pub fn validate_catalog(doc: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let Some(records) = doc.get("capabilities").and_then(Value::as_array) else {
        issues.push(ValidationIssue::error(
            "capabilities".to_string(),
            "missing or not an array".to_string(),
        ));
        return issues;
    };

    let mut seen: HashMap<String, usize> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        validate_record(i, record, &mut seen, &mut issues);
    }

    match doc.pointer("/session_summary/total").and_then(Value::as_u64) {
        None => issues.push(ValidationIssue::error(
            "session_summary.total".to_string(),
            "missing or not a non-negative integer".to_string(),
        )),
        Some(total) if total != records.len() as u64 => {
            issues.push(ValidationIssue::warning(
                "session_summary.total".to_string(),
                format!(
                    "summary reports {total} capabilities but {} records are present",
                    records.len()
                ),
            ));
        }
        Some(_) => {}
    }

    issues
}

fn validate_record(
    index: usize,
    record: &Value,
    seen: &mut HashMap<String, usize>,
    issues: &mut Vec<ValidationIssue>,
) {
    let at = |field: &str| format!("capabilities[{index}].{field}");

    let name = match record.get("name").and_then(Value::as_str) {
        Some("") => {
            issues.push(ValidationIssue::error(at("name"), "name is empty".to_string()));
            None
        }
        Some(name) => Some(name),
        None => {
            issues.push(ValidationIssue::error(
                at("name"),
                "missing or not a string".to_string(),
            ));
            None
        }
    };

    let category = match record.get("category").and_then(Value::as_str) {
        Some(raw) => match raw.parse::<Category>() {
            Ok(category) => Some(category),
            Err(err) => {
                issues.push(ValidationIssue::error(at("category"), err.to_string()));
                None
            }
        },
        None => {
            issues.push(ValidationIssue::error(
                at("category"),
                "missing or not a string".to_string(),
            ));
            None
        }
    };

    if !record.get("description").is_some_and(Value::is_string) {
        issues.push(ValidationIssue::error(
            at("description"),
            "missing or not a string".to_string(),
        ));
    }

    for field in ["server", "namespace"] {
        if record.get(field).is_some_and(|v| !v.is_string() && !v.is_null()) {
            issues.push(ValidationIssue::error(
                at(field),
                "must be a string when present".to_string(),
            ));
        }
    }

    let has_server = record
        .get("server")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    if category == Some(Category::McpTool) && !has_server {
        issues.push(ValidationIssue::warning(
            at("server"),
            "mcp_tool without a server; its copy string will be incomplete".to_string(),
        ));
    }

    if let (Some(name), Some(category)) = (name, category) {
        let key = format!("{name}|{category}");
        if let Some(first) = seen.get(&key) {
            issues.push(ValidationIssue::warning(
                at("name"),
                format!("duplicate of capabilities[{first}] ({key}); selection treats them as one"),
            ));
        } else {
            seen.insert(key, index);
        }
    }
}
