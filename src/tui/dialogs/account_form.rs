//! Account form dialog
//!
//! Modal form for creating and editing accounts: kind toggle, service picker,
//! credential and billing fields, then one input per member slot. Field
//! values are pushed into the form controller as they are typed; the widget
//! state here only tracks focus and cursors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::error::StreamkeepResult;
use crate::form::{Draft, FormController, FormState};
use crate::models::{AccountKind, StreamingService};
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

const LABEL_WIDTH: u16 = 11;

/// Which field is currently focused in the account form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Kind,
    Service,
    Email,
    Password,
    Day,
    Year,
    Member(usize),
}

impl FormField {
    /// Next field (Tab), wrapping after the last member slot
    pub fn next(self, slots: usize) -> Self {
        match self {
            Self::Kind => Self::Service,
            Self::Service => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Day,
            Self::Day => Self::Year,
            Self::Year if slots > 0 => Self::Member(0),
            Self::Year => Self::Kind,
            Self::Member(i) if i + 1 < slots => Self::Member(i + 1),
            Self::Member(_) => Self::Kind,
        }
    }

    /// Previous field (Shift+Tab)
    pub fn prev(self, slots: usize) -> Self {
        match self {
            Self::Kind if slots > 0 => Self::Member(slots - 1),
            Self::Kind => Self::Year,
            Self::Service => Self::Kind,
            Self::Email => Self::Service,
            Self::Password => Self::Email,
            Self::Day => Self::Password,
            Self::Year => Self::Day,
            Self::Member(0) => Self::Year,
            Self::Member(i) => Self::Member(i - 1),
        }
    }
}

/// Widget state for the account form dialog
#[derive(Debug, Clone, Default)]
pub struct AccountFormState {
    pub focused_field: FormField,

    /// Service under the picker cursor (not necessarily selected)
    pub service_cursor: usize,

    pub email: TextInput,
    pub password: TextInput,
    pub day: TextInput,
    pub year: TextInput,
    pub members: Vec<TextInput>,

    pub error_message: Option<String>,
}

impl AccountFormState {
    /// Widget state mirroring `draft`
    pub fn from_draft(draft: &Draft) -> Self {
        let mut state = Self {
            focused_field: FormField::Kind,
            service_cursor: draft.service.map_or(0, StreamingService::index),
            email: text_input("Email", "name@example.com", &draft.email),
            password: text_input("Password", "required", &draft.password),
            day: text_input("Day", "1-31", &draft.billing_day),
            year: text_input("Year", "2024-2030", &draft.billing_year),
            members: Vec::new(),
            error_message: None,
        };
        state.reload_members(draft);
        state
    }

    /// Rebuild the member inputs after the slots changed
    pub fn reload_members(&mut self, draft: &Draft) {
        let personal = draft.kind == AccountKind::Personal;
        self.members = draft
            .members
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let placeholder = if personal {
                    "Your name".to_string()
                } else {
                    format!("Member {}", i + 1)
                };
                text_input(&format!("#{}", i + 1), &placeholder, name)
            })
            .collect();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next(self.members.len());
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev(self.members.len());
    }

    /// The text input under focus, if the focused field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Email => Some(&mut self.email),
            FormField::Password => Some(&mut self.password),
            FormField::Day => Some(&mut self.day),
            FormField::Year => Some(&mut self.year),
            FormField::Member(i) => self.members.get_mut(i),
            FormField::Kind | FormField::Service => None,
        }
    }

    pub fn move_service_cursor(&mut self, forward: bool) {
        let count = StreamingService::ALL.len();
        self.service_cursor = if forward {
            (self.service_cursor + 1) % count
        } else {
            (self.service_cursor + count - 1) % count
        };
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

fn text_input(label: &str, placeholder: &str, value: &str) -> TextInput {
    TextInput::new()
        .label(label)
        .label_width(LABEL_WIDTH)
        .placeholder(placeholder)
        .content(value)
}

/// Write the focused text input's value into the draft
fn push_text(form: &mut FormController, field: FormField, value: String) -> StreamkeepResult<()> {
    match field {
        FormField::Email => form.set_email(value),
        FormField::Password => form.set_password(value),
        FormField::Day => form.set_billing_day(value),
        FormField::Year => form.set_billing_year(value),
        FormField::Member(i) => form.set_member(i, value),
        FormField::Kind | FormField::Service => Ok(()),
    }
}

/// Render the account form dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(draft) = app.form.draft() else {
        return;
    };
    let view = &mut app.form_view;
    let focused = view.focused_field;

    let slots = view.members.len();
    // kind, service, blank, 4 fields, blank, members title, slots, blank, error, hints
    let height = 12 + slots as u16 + 2;
    let area = centered_rect_fixed(64, height, frame.area());

    frame.render_widget(Clear, area);

    let title = match app.form.state() {
        FormState::Editing(..) => " Edit Account ",
        _ => " New Account ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let mut constraints = vec![Constraint::Length(1); 10 + slots];
    constraints.extend([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    frame.render_widget(
        Paragraph::new(kind_line(draft.kind, focused == FormField::Kind)),
        rows[0],
    );
    frame.render_widget(
        Paragraph::new(service_line(
            draft.service,
            view.service_cursor,
            focused == FormField::Service,
        )),
        rows[1],
    );

    for (row, (input, field)) in [
        (&mut view.email, FormField::Email),
        (&mut view.password, FormField::Password),
        (&mut view.day, FormField::Day),
        (&mut view.year, FormField::Year),
    ]
    .into_iter()
    .enumerate()
    {
        input.focused = focused == field;
        frame.render_widget(&*input, rows[3 + row]);
    }

    let members_title = match (draft.service, draft.kind) {
        (None, _) => "Members (select a service first)",
        (Some(_), AccountKind::Group) => "Group members",
        (Some(_), AccountKind::Personal) => "User name",
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            members_title,
            Style::default().fg(Color::Yellow),
        )),
        rows[8],
    );

    for (i, input) in view.members.iter_mut().enumerate() {
        input.focused = focused == FormField::Member(i);
        frame.render_widget(&*input, rows[9 + i]);
    }

    if let Some(error) = &view.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            rows[10 + slots],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Space]", Style::default().fg(Color::White)),
        Span::raw(" Toggle/Pick  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), rows[11 + slots]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    }
}

fn kind_line(kind: AccountKind, focused: bool) -> Line<'static> {
    let option = |this: AccountKind| {
        let style = if this == kind {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(format!(" {} ", this), style)
    };

    Line::from(vec![
        Span::styled(format!("{:<width$}", "Type:", width = LABEL_WIDTH as usize), label_style(focused)),
        option(AccountKind::Group),
        Span::raw(" "),
        option(AccountKind::Personal),
    ])
}

fn service_line(
    selected: Option<StreamingService>,
    cursor: usize,
    focused: bool,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<width$}", "Service:", width = LABEL_WIDTH as usize),
        label_style(focused),
    )];

    for (i, service) in StreamingService::ALL.into_iter().enumerate() {
        let (r, g, b) = service.config().accent;
        let mut style = Style::default().fg(Color::Rgb(r, g, b));
        if selected == Some(service) {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        if focused && i == cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(service.to_string(), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

/// Handle key input for the account form. Returns true if the key was used.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.cancel_form();
            return true;
        }
        KeyCode::Enter => {
            app.submit_form();
            return true;
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.form_view.prev_field();
            return true;
        }
        KeyCode::Tab | KeyCode::Down => {
            app.form_view.next_field();
            return true;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form_view.prev_field();
            return true;
        }
        _ => {}
    }

    match app.form_view.focused_field {
        FormField::Kind => match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                report(app, |app| app.form.toggle_kind());
                if let Some(draft) = app.form.draft() {
                    app.form_view.reload_members(draft);
                }
                true
            }
            _ => false,
        },
        FormField::Service => match key.code {
            KeyCode::Left => {
                app.form_view.move_service_cursor(false);
                true
            }
            KeyCode::Right => {
                app.form_view.move_service_cursor(true);
                true
            }
            KeyCode::Char(' ') => {
                let service = StreamingService::ALL[app.form_view.service_cursor];
                report(app, |app| app.form.select_service(service));
                if let Some(draft) = app.form.draft() {
                    app.form_view.reload_members(draft);
                }
                true
            }
            _ => false,
        },
        field => handle_text_key(app, field, key),
    }
}

fn handle_text_key(app: &mut App, field: FormField, key: KeyEvent) -> bool {
    let Some(input) = app.form_view.focused_input() else {
        return false;
    };

    let edited = match key.code {
        KeyCode::Char(c) => {
            input.insert(c);
            true
        }
        KeyCode::Backspace => {
            input.backspace();
            true
        }
        KeyCode::Delete => {
            input.delete();
            true
        }
        KeyCode::Left => {
            input.move_left();
            false
        }
        KeyCode::Right => {
            input.move_right();
            false
        }
        KeyCode::Home => {
            input.move_start();
            false
        }
        KeyCode::End => {
            input.move_end();
            false
        }
        _ => return false,
    };

    if edited {
        let value = input.value().to_string();
        app.form_view.clear_error();
        report(app, |app| push_text(&mut app.form, field, value));
    }
    true
}

/// Run a form operation, showing any error in the dialog
fn report<F>(app: &mut App, op: F)
where
    F: FnOnce(&mut App) -> StreamkeepResult<()>,
{
    if let Err(e) = op(app) {
        app.form_view.set_error(e.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::create_test_app;
    use crate::tui::app::ActiveDialog;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_field_cycle() {
        assert_eq!(FormField::Year.next(0), FormField::Kind);
        assert_eq!(FormField::Year.next(2), FormField::Member(0));
        assert_eq!(FormField::Member(1).next(2), FormField::Kind);
        assert_eq!(FormField::Kind.prev(2), FormField::Member(1));
        assert_eq!(FormField::Kind.prev(0), FormField::Year);
        assert_eq!(FormField::Member(0).prev(2), FormField::Year);
    }

    #[test]
    fn test_fill_and_submit_with_keys() {
        let mut app = create_test_app();
        app.open_create_form();

        // Kind -> Personal
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        // Service picker: Netflix -> HBO, select
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "a@x.io");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "pw");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "15");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Ana");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.active_dialog, ActiveDialog::None);
        let account = &app.service.accounts()[0];
        assert_eq!(account.kind, AccountKind::Personal);
        assert_eq!(account.service, StreamingService::Hbo);
        assert_eq!(account.billing_day, 15);
        assert_eq!(account.billing_year, 2025);
        assert_eq!(account.members, ["Ana"]);
    }

    #[test]
    fn test_selecting_service_rebuilds_member_inputs() {
        let mut app = create_test_app();
        app.open_create_form();
        press(&mut app, KeyCode::Tab);

        for _ in 0..2 {
            press(&mut app, KeyCode::Right);
        }
        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.form_view.members.len(), 6);
        assert_eq!(
            app.form.draft().unwrap().service,
            Some(StreamingService::Paramount)
        );
    }

    #[test]
    fn test_toggling_kind_refreshes_member_inputs() {
        let mut app = create_test_app();
        app.open_create_form();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::BackTab);

        assert_eq!(app.form_view.members.len(), 5);
        assert_eq!(app.form_view.members[0].placeholder, "Member 1");

        press(&mut app, KeyCode::Char(' '));

        assert_eq!(app.form.draft().unwrap().kind, AccountKind::Personal);
        assert_eq!(app.form_view.members.len(), 5);
        assert!(app
            .form_view
            .members
            .iter()
            .all(|input| input.placeholder == "Your name"));
    }

    #[test]
    fn test_backspace_updates_draft() {
        let mut app = create_test_app();
        app.open_create_form();
        app.form_view.focused_field = FormField::Email;
        type_text(&mut app, "ab");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.form.draft().unwrap().email, "a");
    }

    #[test]
    fn test_escape_cancels() {
        let mut app = create_test_app();
        app.open_create_form();
        press(&mut app, KeyCode::Esc);
        assert!(!app.form.is_open());
        assert!(!app.has_dialog());
    }
}
