//! Account card columns
//!
//! Personal and group accounts side by side, one card per account, each
//! card tinted with its service's accent colour.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::{display_password, format_members};
use crate::models::{AccountKind, SubscriptionAccount};
use crate::tui::app::{App, Column};

/// Render the header with account counts
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let partition = app.partition();

    let line = Line::from(vec![
        Span::styled(
            " streamkeep ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::raw(format!(
            "{} accounts ({} personal, {} group)",
            partition.len(),
            partition.personal.len(),
            partition.group.len()
        )),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render one column of cards
pub fn render_column(frame: &mut Frame, app: &App, column: Column, area: Rect) {
    let is_focused = app.focused_column == column && !app.has_dialog();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::White
    };

    let partition = app.partition();
    let accounts = partition.for_kind(column.kind());

    let title = match column.kind() {
        AccountKind::Personal => format!(" Personal Accounts ({}) ", accounts.len()),
        AccountKind::Group => format!(" Group Accounts ({}) ", accounts.len()),
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if accounts.is_empty() {
        let hint = Paragraph::new("No accounts yet. Press 'n' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = accounts
        .iter()
        .map(|account| card(account, app.reveal_passwords))
        .collect();

    let list = List::new(items).block(block);
    let list = if is_focused {
        list.highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ")
    } else {
        list.highlight_symbol("  ")
    };

    let mut state = ListState::default();
    state.select(Some(app.selected_index(column)));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Card lines for one account
fn card(account: &SubscriptionAccount, reveal: bool) -> ListItem<'static> {
    let (r, g, b) = account.service.config().accent;
    let accent = Color::Rgb(r, g, b);
    let dim = Style::default().fg(Color::Gray);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                account.service.to_string(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", account.id), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Email:    ", dim),
            Span::raw(account.email.clone()),
        ]),
        Line::from(vec![
            Span::styled("Password: ", dim),
            Span::raw(display_password(account, reveal).to_string()),
        ]),
        Line::from(vec![
            Span::styled("Billing:  ", dim),
            Span::raw(account.billing_label()),
        ]),
        Line::from(vec![
            Span::styled("Members:  ", dim),
            Span::styled(format_members(&account.members), Style::default().fg(accent)),
        ]),
        Line::from(""),
    ];

    ListItem::new(lines)
}
