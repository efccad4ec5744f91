//! Account CLI commands
//!
//! Scriptable counterparts of the TUI form. Every create and edit goes
//! through the same form controller and constraints the TUI uses.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{StreamkeepError, StreamkeepResult};
use crate::form::FormController;
use crate::models::{AccountKind, StreamingService, SubscriptionAccount};
use crate::services::AccountService;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Streaming service (netflix, hbo, paramount, prime, crunchyroll, spotify)
        #[arg(short, long)]
        service: String,
        /// Account type (group or personal); defaults to the configured kind
        #[arg(short, long)]
        kind: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: String,
        /// Login password
        #[arg(short, long)]
        password: String,
        /// Billing day of the month (1-31)
        #[arg(short, long)]
        day: String,
        /// Billing year (2024-2030); defaults to the current year
        #[arg(short, long)]
        year: Option<String>,
        /// Member name, once per slot in order
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// List all accounts
    List {
        /// Only show accounts of this type (group or personal)
        #[arg(short, long)]
        kind: Option<String>,
        /// Show passwords in clear
        #[arg(short, long)]
        reveal: bool,
    },
    /// Show account details
    Show {
        /// Account ID or ID prefix
        account: String,
        /// Show the password in clear
        #[arg(short, long)]
        reveal: bool,
    },
    /// Edit an account
    Edit {
        /// Account ID or ID prefix
        account: String,
        /// New service; member names must be given again
        #[arg(short, long)]
        service: Option<String>,
        /// New account type
        #[arg(short, long)]
        kind: Option<String>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
        #[arg(short, long)]
        day: Option<String>,
        #[arg(short, long)]
        year: Option<String>,
        /// Replacement member names, one per slot in order
        #[arg(short, long = "member")]
        members: Vec<String>,
    },
    /// Delete an account
    Delete {
        /// Account ID or ID prefix
        account: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle an account command
pub fn handle_account_command(
    service: &mut AccountService,
    settings: &Settings,
    cmd: AccountCommands,
) -> StreamkeepResult<()> {
    let mut form = FormController::new(settings.default_account_kind);

    match cmd {
        AccountCommands::Add {
            service: service_name,
            kind,
            email,
            password,
            day,
            year,
            members,
        } => {
            form.open_create();
            if let Some(kind) = kind {
                form.set_kind(parse_kind(&kind)?)?;
            }
            form.select_service(parse_service(&service_name)?)?;
            form.set_email(email)?;
            form.set_password(password)?;
            form.set_billing_day(day)?;
            if let Some(year) = year {
                form.set_billing_year(year)?;
            }
            for (slot, name) in members.into_iter().enumerate() {
                form.set_member(slot, name)?;
            }

            let account = form.submit(service)?.account().clone();

            println!("Created account: {}", account.label());
            println!("  Type:    {}", account.kind);
            println!("  Billing: {}", account.billing_label());
            println!("  Members: {}", account.members.len());
            println!("  ID:      {}", account.id);
        }

        AccountCommands::List { kind, reveal } => {
            let accounts: Vec<SubscriptionAccount> = match kind {
                Some(kind) => {
                    let kind = parse_kind(&kind)?;
                    service
                        .accounts()
                        .iter()
                        .filter(|a| a.kind == kind)
                        .cloned()
                        .collect()
                }
                None => service.accounts().to_vec(),
            };
            print!(
                "{}",
                format_account_list(&accounts, reveal || settings.reveal_passwords)
            );
        }

        AccountCommands::Show { account, reveal } => {
            let found = service.find(&account)?;
            print!(
                "{}",
                format_account_details(found, reveal || settings.reveal_passwords)
            );
        }

        AccountCommands::Edit {
            account,
            service: service_name,
            kind,
            email,
            password,
            day,
            year,
            members,
        } => {
            let found = service.find(&account)?.clone();

            if service_name.is_none()
                && kind.is_none()
                && email.is_none()
                && password.is_none()
                && day.is_none()
                && year.is_none()
                && members.is_empty()
            {
                println!("No changes specified. Use --help to see the editable fields.");
                return Ok(());
            }

            form.open_edit(&found);
            if let Some(kind) = kind {
                form.set_kind(parse_kind(&kind)?)?;
            }
            if let Some(name) = service_name {
                form.select_service(parse_service(&name)?)?;
            }
            if let Some(email) = email {
                form.set_email(email)?;
            }
            if let Some(password) = password {
                form.set_password(password)?;
            }
            if let Some(day) = day {
                form.set_billing_day(day)?;
            }
            if let Some(year) = year {
                form.set_billing_year(year)?;
            }
            if !members.is_empty() {
                let slots = form.draft().map_or(0, |d| d.members.len());
                if members.len() != slots {
                    return Err(StreamkeepError::Validation(format!(
                        "Expected {} member names, got {}",
                        slots,
                        members.len()
                    )));
                }
                for (slot, name) in members.into_iter().enumerate() {
                    form.set_member(slot, name)?;
                }
            }

            let updated = form.submit(service)?.account().clone();
            println!("Updated account: {}", updated.label());
        }

        AccountCommands::Delete { account, force } => {
            let id = service.find(&account)?.id;

            let removed = form.delete(service, id, |account| {
                force || confirm(&format!("Delete {}?", account.label()))
            })?;

            match removed {
                Some(account) => println!("Deleted account: {}", account.label()),
                None => println!("Cancelled."),
            }
        }
    }

    Ok(())
}

/// Parse an account kind argument
pub fn parse_kind(s: &str) -> StreamkeepResult<AccountKind> {
    AccountKind::parse(s).ok_or_else(|| {
        StreamkeepError::Validation(format!(
            "Invalid account type: '{}'. Valid types: group, personal",
            s
        ))
    })
}

/// Parse a streaming service argument
pub fn parse_service(s: &str) -> StreamkeepResult<StreamingService> {
    StreamingService::parse(s).ok_or_else(|| {
        let keys: Vec<_> = StreamingService::ALL.iter().map(|s| s.key()).collect();
        StreamkeepError::Validation(format!(
            "Unknown service: '{}'. Valid services: {}",
            s,
            keys.join(", ")
        ))
    })
}

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
