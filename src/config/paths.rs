//! Path management for streamkeep
//!
//! ## Path Resolution Order
//!
//! 1. `STREAMKEEP_DATA_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/streamkeep` on Linux, `%APPDATA%\streamkeep\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::StreamkeepError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "STREAMKEEP_DATA_DIR";

/// Manages all paths used by streamkeep
#[derive(Debug, Clone)]
pub struct StreamkeepPaths {
    /// Base directory for all streamkeep data
    base_dir: PathBuf,
}

impl StreamkeepPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, StreamkeepError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "streamkeep")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    StreamkeepError::Config("Could not determine home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the key-value store files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Diagnostic log used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("streamkeep.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), StreamkeepError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            StreamkeepError::Io(format!("Failed to create base directory: {}", e))
        })?;

        std::fs::create_dir_all(self.data_dir()).map_err(|e| {
            StreamkeepError::Io(format!("Failed to create data directory: {}", e))
        })?;

        Ok(())
    }
}
