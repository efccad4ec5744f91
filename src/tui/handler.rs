//! Event handler for the TUI
//!
//! Routes keyboard events to the open dialog, or to the card view when no
//! dialog is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, Column};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => {}
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    match app.active_dialog {
        ActiveDialog::None => handle_normal_key(app, key),
        ActiveDialog::AccountForm => {
            dialogs::account_form::handle_key(app, key);
        }
        ActiveDialog::ConfirmDelete(_) => {
            dialogs::confirm::handle_key(app, key);
        }
        ActiveDialog::Help => app.close_dialog(),
    }
}

/// Handle keys on the card view
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    app.clear_status();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_help(),

        KeyCode::Char('n') | KeyCode::Char('a') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('r') => app.toggle_reveal(),

        KeyCode::Char('h') | KeyCode::Left => app.focus_column(Column::Personal),
        KeyCode::Char('l') | KeyCode::Right => app.focus_column(Column::Group),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_column(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),

        _ => {}
    }
}
