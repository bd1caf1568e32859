//! Catalog command handlers
//!
//! Implements `catalog build`, `catalog validate`, and `catalog query`.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use skunkd_core::catalog::{Capability, Catalog};
use skunkd_core::error::CatalogError;
use skunkd_docs::catalog::{
    CatalogView, Severity, ValidationIssue, copy_string, record_key, validate_catalog, write_page,
};
use skunkd_docs::escape::group_thousands;

use crate::cli::args::{CatalogBuildArgs, CatalogQueryArgs, CatalogValidateArgs, OutputFormat};
use crate::error::SkunkdError;

/// Render the catalog JSON into the standalone HTML page.
///
/// # Errors
///
/// Returns a catalog error if the input cannot be read or parsed, or a
/// docs error if the page cannot be written.
pub fn build(args: &CatalogBuildArgs) -> Result<(), SkunkdError> {
    let input = &args.source.input;
    tracing::info!(input = %input.display(), "loading catalog");
    let catalog = Catalog::load(input)?;

    let total = catalog.session_summary.total;
    if usize::try_from(total).ok() != Some(catalog.len()) {
        tracing::warn!(
            summary_total = total,
            records = catalog.len(),
            "session_summary.total does not match the number of records"
        );
    }

    let bytes = write_page(&catalog, &args.output)?;
    tracing::info!(output = %args.output.display(), bytes, "catalog page written");

    println!("Written: {}", args.output.display());
    println!("Total capabilities: {total}");
    println!("Size: {} bytes", group_thousands(bytes));
    Ok(())
}

/// Summary block of the JSON validation report.
#[derive(Debug, Serialize)]
struct ValidationSummary {
    errors: usize,
    warnings: usize,
}

/// JSON validation report.
#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    file: String,
    issues: &'a [ValidationIssue],
    summary: ValidationSummary,
}

/// Check a catalog for problems without writing anything.
///
/// # Errors
///
/// Returns a catalog error if the input is unreadable or not JSON, and
/// `SkunkdError::Validation` if any error is found (or any warning, under
/// `--strict`).
pub fn validate(args: &CatalogValidateArgs) -> Result<(), SkunkdError> {
    let path = &args.source.input;
    tracing::info!(file = %path.display(), "validating catalog");
    let doc = read_json(path)?;
    let issues = validate_catalog(&doc);

    let errors = count_severity(&issues, Severity::Error);
    let warnings = count_severity(&issues, Severity::Warning);

    match args.format {
        OutputFormat::Human => {
            for issue in &issues {
                eprintln!("{issue}");
            }
            if issues.is_empty() {
                println!("Validation passed: {}", path.display());
            } else {
                println!("{errors} error(s), {warnings} warning(s) found");
            }
        }
        OutputFormat::Json => {
            let report = ValidationReport {
                file: path.display().to_string(),
                issues: &issues,
                summary: ValidationSummary { errors, warnings },
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    let failing_warnings = if args.strict { warnings } else { 0 };
    if errors > 0 || failing_warnings > 0 {
        return Err(SkunkdError::Validation {
            path: path.clone(),
            errors,
            warnings: failing_warnings,
        });
    }
    tracing::info!(file = %path.display(), warnings, "catalog valid");
    Ok(())
}

/// One row of `catalog query --format json`.
#[derive(Debug, Serialize)]
struct QueryRow<'a> {
    #[serde(flatten)]
    record: &'a Capability,
    key: String,
    copy: String,
}

/// Search and filter the catalog from the terminal.
///
/// # Errors
///
/// Returns a catalog error if the input cannot be read or parsed.
pub fn query(args: &CatalogQueryArgs) -> Result<(), SkunkdError> {
    let catalog = Catalog::load(&args.source.input)?;
    let mut view = CatalogView::new(&catalog.capabilities);

    if let Some(search) = &args.search {
        view.set_search(search);
    }
    // Filters toggle, so a repeated flag must only be applied once.
    for category in args.categories.iter().copied().collect::<BTreeSet<_>>() {
        view.toggle_category(category);
    }
    for server in args.servers.iter().collect::<BTreeSet<_>>() {
        view.toggle_server(server);
    }
    for namespace in args.namespaces.iter().collect::<BTreeSet<_>>() {
        view.toggle_namespace(namespace);
    }

    let matches = view.filtered();
    tracing::debug!(matched = matches.len(), total = catalog.len(), "catalog query");

    if args.copy {
        // Records sharing a key collapse into one tray entry.
        for cap in &matches {
            if !view.is_selected(cap) {
                view.toggle_selected(cap);
            }
        }
        println!("{}", view.tray_copy_text());
        return Ok(());
    }

    match args.format {
        OutputFormat::Human => {
            let name_width = matches.iter().map(|c| c.name.len()).max().unwrap_or(0);
            for cap in &matches {
                println!(
                    "{:<5}  {:<name_width$}  {}",
                    cap.category.label(),
                    cap.name,
                    copy_string(cap)
                );
            }
            println!("{} of {} capabilities", matches.len(), catalog.len());
        }
        OutputFormat::Json => {
            let rows: Vec<QueryRow<'_>> = matches
                .iter()
                .map(|&record| QueryRow {
                    record,
                    key: record_key(record),
                    copy: copy_string(record),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn read_json(path: &Path) -> Result<Value, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| CatalogError::parse(path, &e))
}

fn count_severity(issues: &[ValidationIssue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}
