//! Export module for streamkeep
//!
//! Writes the account collection out in one of three formats:
//! - CSV: one row per account (spreadsheet-compatible)
//! - JSON: the full records with schema metadata
//! - YAML: the same document as JSON, for reading by eye

pub mod csv;
pub mod json;
pub mod yaml;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

pub use self::csv::export_csv;
pub use json::{export_json, AccountExport, ExportMetadata, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use crate::error::{StreamkeepError, StreamkeepResult};
use crate::models::SubscriptionAccount;

/// Output format of an export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write `accounts` to `path` in `format`, replacing any existing file
pub fn export_to_path(
    accounts: &[SubscriptionAccount],
    path: &Path,
    format: ExportFormat,
) -> StreamkeepResult<()> {
    let file = File::create(path)
        .map_err(|e| StreamkeepError::Export(format!("{}: {}", path.display(), e)))?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Json => export_json(accounts, &mut writer)?,
        ExportFormat::Yaml => export_yaml(accounts, &mut writer)?,
        ExportFormat::Csv => export_csv(accounts, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| StreamkeepError::Export(format!("{}: {}", path.display(), e)))?;

    info!(path = %path.display(), %format, count = accounts.len(), "export written");
    Ok(())
}
