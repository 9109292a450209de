#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use assert_cmd::Command;
use chrono::NaiveDate;
use fintrack::cli::context::CliContext;
use fintrack_core::FixedClock;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated application home for one test.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// A context over a fresh home with the clock pinned to `today`.
pub fn setup_context(today: &str) -> CliContext {
    let date = NaiveDate::parse_from_str(today, "%Y-%m-%d").expect("valid date");
    CliContext::load(test_home(), Arc::new(FixedClock::new(date))).expect("load context")
}

/// The `fintrack` binary bound to `home`, with colours off and the date pinned.
pub fn fintrack(home: &PathBuf, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").expect("binary built");
    cmd.env("FINTRACK_HOME", home)
        .env("FINTRACK_TODAY", today)
        .env_remove("FINTRACK_USER")
        .env_remove("RUST_LOG")
        .arg("--plain");
    cmd
}
