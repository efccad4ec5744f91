//! CLI command for showing and changing settings

use clap::Args;

use crate::config::{Settings, StreamkeepPaths};
use crate::error::StreamkeepResult;

use super::account::parse_kind;

/// Settings to change; with none given, the current configuration is shown
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Account type preselected in new forms (group or personal)
    #[arg(long)]
    pub default_kind: Option<String>,
    /// Show passwords in clear by default
    #[arg(long)]
    pub reveal_passwords: Option<bool>,
    /// Record changes in the audit log
    #[arg(long)]
    pub audit: Option<bool>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.default_kind.is_none() && self.reveal_passwords.is_none() && self.audit.is_none()
    }
}

/// Handle the config command
pub fn handle_config_command(
    paths: &StreamkeepPaths,
    settings: &mut Settings,
    args: ConfigArgs,
) -> StreamkeepResult<()> {
    if !args.is_empty() {
        if let Some(kind) = args.default_kind {
            settings.default_account_kind = parse_kind(&kind)?;
        }
        if let Some(reveal) = args.reveal_passwords {
            settings.reveal_passwords = reveal;
        }
        if let Some(audit) = args.audit {
            settings.audit_enabled = audit;
        }
        settings.save(paths)?;
        println!("Settings saved to {}", paths.settings_file().display());
        println!();
    }

    println!("streamkeep configuration");
    println!("========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Data directory: {}", paths.data_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!("Log file:       {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Default account type: {}", settings.default_account_kind);
    println!("  Reveal passwords:     {}", settings.reveal_passwords);
    println!("  Audit enabled:        {}", settings.audit_enabled);

    Ok(())
}
