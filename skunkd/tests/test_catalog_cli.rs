mod common;

use std::fs;

use common::{fixture_arg, fixture_path, run, run_in, stderr, stdout};

#[test]
fn build_writes_page_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/catalog.html");
    let output = run(&[
        "catalog",
        "build",
        "--input",
        &fixture_arg("sample_catalog.json"),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains(&format!("Written: {}", out.display())), "{text}");
    assert!(text.contains("Total capabilities: 3"), "{text}");

    let html = fs::read_to_string(&out).unwrap();
    let size = html.len();
    assert!(text.contains(" bytes"), "{text}");
    assert!(size > 1_000, "page suspiciously small: {size} bytes");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Capabilities Catalog (3)</title>"));
    assert!(html.contains("const RAW_CAPS="));
    assert!(html.contains(r#""name":"git:commit""#));
}

#[test]
fn build_uses_default_paths() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(".claude")).unwrap();
    fs::copy(
        fixture_path("sample_catalog.json"),
        dir.path().join(".claude/capabilities-catalog.json"),
    )
    .unwrap();

    let output = run_in(dir.path(), &["catalog", "build"]);
    assert!(output.status.success(), "build failed: {}", stderr(&output));
    assert!(dir.path().join(".claude/capabilities-catalog.html").is_file());
}

#[test]
fn build_missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[
        "catalog",
        "build",
        "--input",
        dir.path().join("absent.json").to_str().unwrap(),
        "--output",
        dir.path().join("out.html").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("error: failed to read"));
    assert!(!dir.path().join("out.html").exists());
}

#[test]
fn build_malformed_input_is_invalid() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.html");
    let output = run(&[
        "catalog",
        "build",
        "--input",
        &fixture_arg("malformed_catalog.json"),
        "--output",
        out.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("error: parse error in"));
    assert!(!out.exists());
}

#[test]
fn build_rejects_unknown_category() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&[
        "catalog",
        "build",
        "--input",
        &fixture_arg("bad_category.json"),
        "--output",
        dir.path().join("out.html").to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn validate_clean_catalog() {
    let output = run(&[
        "catalog",
        "validate",
        "--input",
        &fixture_arg("sample_catalog.json"),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Validation passed"));
}

#[test]
fn validate_reports_category_suggestion() {
    let output = run(&[
        "catalog",
        "validate",
        "--input",
        &fixture_arg("bad_category.json"),
    ]);
    assert_eq!(output.status.code(), Some(2));
    let err = stderr(&output);
    assert!(err.contains("capabilities[0].category"), "{err}");
    assert!(err.contains("did you mean 'tool'?"), "{err}");
    assert!(err.contains("capabilities[1].server"), "{err}");
    assert!(stdout(&output).contains("1 error(s), 1 warning(s) found"));
}

#[test]
fn validate_warnings_fail_only_when_strict() {
    let input = fixture_arg("summary_mismatch.json");
    let lenient = run(&["catalog", "validate", "--input", &input]);
    assert!(lenient.status.success(), "{}", stderr(&lenient));

    let strict = run(&["catalog", "validate", "--input", &input, "--strict"]);
    assert_eq!(strict.status.code(), Some(2));
}

#[test]
fn validate_json_report() {
    let output = run(&[
        "catalog",
        "validate",
        "--input",
        &fixture_arg("bad_category.json"),
        "--format",
        "json",
    ]);
    assert_eq!(output.status.code(), Some(2));

    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("output should be valid JSON");
    assert_eq!(report["summary"]["errors"], 1);
    assert_eq!(report["summary"]["warnings"], 1);
    assert_eq!(report["issues"][0]["severity"], "error");
    assert_eq!(report["issues"][0]["path"], "capabilities[0].category");
}

#[test]
fn query_search_matches_description() {
    let output = run(&[
        "catalog",
        "query",
        "--input",
        &fixture_arg("sample_catalog.json"),
        "--search",
        "  COMMIT ",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("git:commit"), "{text}");
    assert!(text.contains("/commit"), "{text}");
    assert!(!text.contains("grep"), "{text}");
    assert!(text.contains("1 of 3 capabilities"), "{text}");
}

#[test]
fn query_copy_joins_filtered_records() {
    let input = fixture_arg("sample_catalog.json");
    let all = run(&["catalog", "query", "--input", &input, "--copy"]);
    assert!(all.status.success(), "{}", stderr(&all));
    assert_eq!(stdout(&all), "grep /commit /mcp__web__search\n");

    let mcp = run(&[
        "catalog", "query", "--input", &input, "--category", "mcp_tool", "--copy",
    ]);
    assert_eq!(stdout(&mcp), "/mcp__web__search\n");
}

#[test]
fn query_repeated_filter_applies_once() {
    let output = run(&[
        "catalog",
        "query",
        "--input",
        &fixture_arg("sample_catalog.json"),
        "--category",
        "tool",
        "--category",
        "tool",
        "--copy",
    ]);
    assert_eq!(stdout(&output), "grep\n");
}

#[test]
fn query_dimensions_are_anded() {
    let output = run(&[
        "catalog",
        "query",
        "--input",
        &fixture_arg("sample_catalog.json"),
        "--server",
        "web",
        "--namespace",
        "git",
        "--copy",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "\n");
}

#[test]
fn query_json_rows() {
    let output = run(&[
        "catalog",
        "query",
        "--input",
        &fixture_arg("sample_catalog.json"),
        "--namespace",
        "git",
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "git:commit");
    assert_eq!(rows[0]["category"], "skill");
    assert_eq!(rows[0]["key"], "git:commit|skill");
    assert_eq!(rows[0]["copy"], "/commit");
}
