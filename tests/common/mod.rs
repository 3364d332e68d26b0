#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use expense_tracker::{config::ConfigManager, core::ExpenseStore, storage::JsonStorage};
use tempfile::TempDir;

/// Isolated store and settings backed by a fresh temporary directory. Keep the
/// returned guard alive for the duration of the test.
pub fn setup_test_env() -> (TempDir, ExpenseStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let data = data_file(temp.path());
    let store = ExpenseStore::new(Box::new(JsonStorage::new(&data)));
    let config = ConfigManager::new(temp.path().join("config.json"));
    (temp, store, config)
}

pub fn data_file(dir: &Path) -> PathBuf {
    dir.join("expenses.json")
}

/// Binary invocation pinned to `dir`, with colour and script mode off.
pub fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("expense_tracker").expect("binary built");
    cmd.arg("--file")
        .arg(data_file(dir))
        .env("EXPENSE_TRACKER_HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("EXPENSE_TRACKER_FILE")
        .env_remove("EXPENSE_TRACKER_CLI_SCRIPT");
    cmd
}

/// Menu session that reads its answers from `script`.
pub fn menu_session(dir: &Path, script: &str) -> Command {
    let mut cmd = cli(dir);
    cmd.env("EXPENSE_TRACKER_CLI_SCRIPT", "1")
        .write_stdin(script.to_string());
    cmd
}
