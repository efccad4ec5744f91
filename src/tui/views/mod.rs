//! TUI Views module
//!
//! The account columns, the header and the status bar, plus dialog overlay.

pub mod accounts;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, App, Column};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    accounts::render_header(frame, app, layout.header);
    accounts::render_column(frame, app, Column::Personal, layout.personal);
    accounts::render_column(frame, app, Column::Group, layout.group);
    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog.clone() {
        ActiveDialog::None => {}
        ActiveDialog::AccountForm => dialogs::account_form::render(frame, app),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::Help => dialogs::help::render(frame),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountKind, PASSWORD_MASK};
    use crate::tui::app::tests::{add_account, create_test_app};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_cards_in_columns() {
        let mut app = create_test_app();
        add_account(&mut app, AccountKind::Personal, "solo@x.io");
        add_account(&mut app, AccountKind::Group, "team@x.io");

        let text = screen(&mut app);

        assert!(text.contains("Personal Accounts (1)"));
        assert!(text.contains("Group Accounts (1)"));
        assert!(text.contains("solo@x.io"));
        assert!(text.contains("team@x.io"));
        assert!(text.contains(PASSWORD_MASK));
    }

    #[test]
    fn test_render_form_and_confirm_dialogs() {
        let mut app = create_test_app();
        app.open_create_form();
        assert!(screen(&mut app).contains("New Account"));
        app.cancel_form();

        add_account(&mut app, AccountKind::Group, "team@x.io");
        app.request_delete();
        assert!(screen(&mut app).contains("delete this account"));
    }
}
