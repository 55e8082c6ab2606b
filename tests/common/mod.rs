use std::sync::Mutex;

use gastos_core::{core::LedgerManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a manager backed by a unique temporary ledger file for each test.
pub fn setup_manager() -> LedgerManager {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("gastos.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    LedgerManager::new(Box::new(JsonStorage::new(Some(path))))
}
