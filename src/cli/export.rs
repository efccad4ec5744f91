//! CLI command for data export

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::StreamkeepResult;
use crate::export::{export_to_path, ExportFormat};
use crate::services::AccountService;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// JSON document with schema metadata
    Json,
    /// Same document as JSON, human-readable
    Yaml,
    /// One row per account
    Csv,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Json => ExportFormat::Json,
            ExportFormatArg::Yaml => ExportFormat::Yaml,
            ExportFormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// Pick the format: explicit flag, then file extension, then JSON
pub fn resolve_format(output: &Path, format: Option<ExportFormatArg>) -> ExportFormat {
    format
        .map(ExportFormat::from)
        .or_else(|| ExportFormat::from_path(output))
        .unwrap_or(ExportFormat::Json)
}

/// Handle the export command
pub fn handle_export_command(
    service: &AccountService,
    output: PathBuf,
    format: Option<ExportFormatArg>,
) -> StreamkeepResult<()> {
    let format = resolve_format(&output, format);
    export_to_path(service.accounts(), &output, format)?;

    println!(
        "Exported {} accounts to {} ({})",
        service.len(),
        output.display(),
        format
    );
    println!("Note: the export contains passwords in clear text.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_format() {
        assert_eq!(
            resolve_format(Path::new("a.csv"), Some(ExportFormatArg::Yaml)),
            ExportFormat::Yaml
        );
        assert_eq!(resolve_format(Path::new("a.csv"), None), ExportFormat::Csv);
        assert_eq!(resolve_format(Path::new("a.txt"), None), ExportFormat::Json);
    }
}
