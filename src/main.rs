use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use streamkeep::cli::{
    handle_account_command, handle_config_command, handle_export_command, handle_history_command,
    open_account_service, AccountCommands, ConfigArgs, ExportFormatArg,
};
use streamkeep::config::{Settings, StreamkeepPaths};
use streamkeep::display::format_service_table;
use streamkeep::logging::{init_logging, Verbosity};

#[derive(Parser)]
#[command(
    name = "streamkeep",
    version,
    about = "Terminal tracker for shared and personal streaming subscriptions",
    long_about = "streamkeep keeps track of streaming accounts: which service, \
                  the login, when it is billed and who shares it. Run without \
                  a command to open the interactive interface."
)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Account management commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// List the supported streaming services
    Services,

    /// Export all accounts to a file
    Export {
        /// Output file path
        output: PathBuf,

        /// Export format; guessed from the file extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<ExportFormatArg>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);

    let paths = StreamkeepPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            // The TUI owns the terminal, so logs go to a file
            paths.ensure_directories()?;
            init_logging(verbosity, Some(&paths.log_file()));
            let service = open_account_service(&paths, &settings)?;
            streamkeep::tui::run_tui(service, &settings)?;
        }
        Commands::Account(cmd) => {
            init_logging(verbosity, None);
            let mut service = open_account_service(&paths, &settings)?;
            handle_account_command(&mut service, &settings, cmd)?;
        }
        Commands::Services => {
            print!("{}", format_service_table());
        }
        Commands::Export { output, format } => {
            init_logging(verbosity, None);
            let service = open_account_service(&paths, &settings)?;
            handle_export_command(&service, output, format)?;
        }
        Commands::History { limit } => {
            init_logging(verbosity, None);
            let service = open_account_service(&paths, &settings)?;
            handle_history_command(&service, limit)?;
        }
        Commands::Config(args) => {
            init_logging(verbosity, None);
            debug!(base = %paths.base_dir().display(), "showing configuration");
            handle_config_command(&paths, &mut settings, args)?;
        }
    }

    Ok(())
}
