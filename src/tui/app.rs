//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::config::Settings;
use crate::display::Partition;
use crate::form::{FormController, SubmitOutcome};
use crate::models::{AccountId, AccountKind, SubscriptionAccount};
use crate::services::AccountService;

use super::dialogs::account_form::AccountFormState;

/// Which column of cards has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Column {
    #[default]
    Personal,
    Group,
}

impl Column {
    pub fn kind(self) -> AccountKind {
        match self {
            Self::Personal => AccountKind::Personal,
            Self::Group => AccountKind::Group,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Personal => Self::Group,
            Self::Group => Self::Personal,
        }
    }
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Create/edit form; the form controller knows which
    AccountForm,
    /// Waiting for a yes/no before deleting this account
    ConfirmDelete(AccountId),
    Help,
}

/// Main application state
pub struct App {
    pub service: AccountService,

    pub form: FormController,

    /// Widget state of the open form
    pub form_view: AccountFormState,

    pub should_quit: bool,

    pub active_dialog: ActiveDialog,

    pub focused_column: Column,

    /// Selected card index in the personal column
    pub selected_personal: usize,

    /// Selected card index in the group column
    pub selected_group: usize,

    /// Show passwords on cards
    pub reveal_passwords: bool,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(service: AccountService, settings: &Settings) -> Self {
        Self::with_form(service, FormController::new(settings.default_account_kind), settings)
    }

    /// Build with a given form controller (tests pin the default year this way)
    pub fn with_form(service: AccountService, form: FormController, settings: &Settings) -> Self {
        Self {
            service,
            form,
            form_view: AccountFormState::default(),
            should_quit: false,
            active_dialog: ActiveDialog::None,
            focused_column: Column::default(),
            selected_personal: 0,
            selected_group: 0,
            reveal_passwords: settings.reveal_passwords,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    pub fn open_help(&mut self) {
        self.active_dialog = ActiveDialog::Help;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Accounts split into the two columns
    pub fn partition(&self) -> Partition<'_> {
        Partition::of(self.service.accounts())
    }

    /// Selected index in `column`
    pub fn selected_index(&self, column: Column) -> usize {
        match column {
            Column::Personal => self.selected_personal,
            Column::Group => self.selected_group,
        }
    }

    fn selected_index_mut(&mut self, column: Column) -> &mut usize {
        match column {
            Column::Personal => &mut self.selected_personal,
            Column::Group => &mut self.selected_group,
        }
    }

    /// The card under the cursor in the focused column
    pub fn selected_account(&self) -> Option<&SubscriptionAccount> {
        let index = self.selected_index(self.focused_column);
        self.partition()
            .for_kind(self.focused_column.kind())
            .get(index)
            .copied()
    }

    pub fn focus_column(&mut self, column: Column) {
        self.focused_column = column;
        self.clamp_selection();
    }

    pub fn toggle_column(&mut self) {
        self.focus_column(self.focused_column.toggled());
    }

    pub fn move_up(&mut self) {
        let index = self.selected_index_mut(self.focused_column);
        *index = index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let count = self.column_len(self.focused_column);
        let index = self.selected_index_mut(self.focused_column);
        if *index + 1 < count {
            *index += 1;
        }
    }

    fn column_len(&self, column: Column) -> usize {
        self.partition().for_kind(column.kind()).len()
    }

    /// Keep both selections inside their columns after the collection shrinks
    pub fn clamp_selection(&mut self) {
        for column in [Column::Personal, Column::Group] {
            let last = self.column_len(column).saturating_sub(1);
            let index = self.selected_index_mut(column);
            *index = (*index).min(last);
        }
    }

    /// Put the cursor on `id`, switching columns if needed
    pub fn select_account(&mut self, id: AccountId) {
        let found = {
            let partition = self.partition();
            [Column::Personal, Column::Group].into_iter().find_map(|column| {
                partition
                    .for_kind(column.kind())
                    .iter()
                    .position(|a| a.id == id)
                    .map(|index| (column, index))
            })
        };

        if let Some((column, index)) = found {
            self.focused_column = column;
            *self.selected_index_mut(column) = index;
        }
    }

    pub fn toggle_reveal(&mut self) {
        self.reveal_passwords = !self.reveal_passwords;
        self.set_status(if self.reveal_passwords {
            "Passwords shown"
        } else {
            "Passwords hidden"
        });
    }

    /// Open a blank account form
    pub fn open_create_form(&mut self) {
        self.form.open_create();
        self.show_form();
    }

    /// Open the form on the selected card
    pub fn open_edit_form(&mut self) {
        let Some(account) = self.selected_account().cloned() else {
            self.set_status("No account selected");
            return;
        };
        self.form.open_edit(&account);
        self.show_form();
    }

    fn show_form(&mut self) {
        if let Some(draft) = self.form.draft() {
            self.form_view = AccountFormState::from_draft(draft);
            self.active_dialog = ActiveDialog::AccountForm;
        }
    }

    /// Submit the open form; on failure the form stays open with the error
    pub fn submit_form(&mut self) {
        match self.form.submit(&mut self.service) {
            Ok(outcome) => {
                let (verb, account) = match &outcome {
                    SubmitOutcome::Created(account) => ("created", account),
                    SubmitOutcome::Updated(account) => ("updated", account),
                };
                let message = format!("Account {}: {}", verb, account.label());
                let id = account.id;

                self.close_dialog();
                self.select_account(id);
                self.set_status(message);
            }
            Err(e) => self.form_view.set_error(e.to_string()),
        }
    }

    /// Close the form without saving
    pub fn cancel_form(&mut self) {
        self.form.cancel();
        self.close_dialog();
    }

    /// Ask before deleting the selected card
    pub fn request_delete(&mut self) {
        match self.selected_account().map(|a| a.id) {
            Some(id) => self.active_dialog = ActiveDialog::ConfirmDelete(id),
            None => self.set_status("No account selected"),
        }
    }

    /// Answer the pending delete confirmation
    pub fn answer_delete(&mut self, confirmed: bool) {
        let ActiveDialog::ConfirmDelete(id) = self.active_dialog else {
            return;
        };
        self.close_dialog();

        match self.form.delete(&mut self.service, id, |_| confirmed) {
            Ok(Some(removed)) => {
                self.clamp_selection();
                self.set_status(format!("Deleted {}", removed.label()));
            }
            Ok(None) => self.set_status("Delete cancelled"),
            Err(e) => self.set_status(format!("Error: {}", e)),
        }
    }
}
