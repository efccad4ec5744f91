//! Storage layer for streamkeep
//!
//! The account collection lives behind a small key-value trait so the same
//! store works over JSON files on disk or an in-memory map.

pub mod accounts;
pub mod file_io;
pub mod kv;

pub use accounts::{
    deserialize_accounts, serialize_accounts, AccountStore, LoadReport, STORAGE_KEY,
};
pub use file_io::{read_json, write_json_atomic, write_text_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};

use crate::config::paths::StreamkeepPaths;
use crate::error::StreamkeepResult;

/// Open the on-disk account store under the data directory
pub fn open_file_store(paths: &StreamkeepPaths) -> StreamkeepResult<(AccountStore, LoadReport)> {
    paths.ensure_directories()?;
    AccountStore::load(Box::new(JsonFileStore::new(paths.data_dir())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_file_store_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StreamkeepPaths::with_base_dir(temp_dir.path().join("base"));

        let (store, report) = open_file_store(&paths).unwrap();

        assert!(paths.data_dir().exists());
        assert!(store.is_empty());
        assert!(report.is_clean());
    }
}
