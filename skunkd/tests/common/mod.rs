//! Shared integration-test helpers for running the `skunkd` binary.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs `skunkd` with the given arguments and captures its output.
///
/// Environment overrides that would change defaults are cleared so tests
/// see the same configuration on every machine.
#[allow(clippy::missing_panics_doc)]
pub fn run(args: &[&str]) -> Output {
    run_in(&std::env::temp_dir(), args)
}

/// Runs `skunkd` from `dir` with the given arguments.
#[allow(clippy::missing_panics_doc)]
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_skunkd"))
        .args(args)
        .current_dir(dir)
        .env_remove("SKUNKD_CATALOG_INPUT")
        .env_remove("SKUNKD_CATALOG_OUTPUT")
        .env_remove("SKUNKD_STATS_DIR")
        .env_remove("SKUNKD_PLOTLY_SRC")
        .env_remove("SKUNKD_LOG_LEVEL")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run skunkd")
}

/// Returns the path to a test fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Fixture path as a `&str` argument.
pub fn fixture_arg(name: &str) -> String {
    fixture_path(name)
        .to_str()
        .expect("non-UTF-8 fixture path")
        .to_string()
}

/// Stdout as a lossy UTF-8 string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a lossy UTF-8 string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
