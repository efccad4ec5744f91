//! Key-value storage backends
//!
//! The account collection is persisted as a single string blob under a fixed
//! key. Backends only need synchronous get/set of strings.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{StreamkeepError, StreamkeepResult};

use super::file_io::{read_text_if_exists, write_text_atomic};

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> StreamkeepResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StreamkeepResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> StreamkeepResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StreamkeepError::Storage(format!(
                "Invalid storage key: '{}'",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> StreamkeepResult<Option<String>> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "reading key");
        read_text_if_exists(path)
    }

    fn set(&mut self, key: &str, value: &str) -> StreamkeepResult<()> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), bytes = value.len(), "writing key");
        write_text_atomic(path, value)
    }
}

/// In-memory backend
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a value, as if a previous session had written it
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StreamkeepResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StreamkeepResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
