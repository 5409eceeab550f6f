#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use finance_flow::{
    core::{FixedClock, LedgerManager},
    storage::JsonLedgerStorage,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

/// Returns a fresh directory that outlives the calling test.
pub fn test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens a manager on `path` with the clock pinned to [`today`].
pub fn open_at(path: PathBuf) -> LedgerManager {
    LedgerManager::open_with_clock(
        Box::new(JsonLedgerStorage::new(path)),
        Box::new(FixedClock(today())),
    )
}

/// Creates an isolated manager backed by a unique document path.
pub fn setup_manager() -> (LedgerManager, PathBuf) {
    let path = test_dir().join("finance_data.json");
    (open_at(path.clone()), path)
}

pub fn tmp_path_for(path: &Path) -> PathBuf {
    path.with_extension("json.tmp")
}
