//! List screens
//!
//! Account selection, the operation menu and the withdrawal denominations all
//! render as a highlighted list driven by the input cursor.

use atm_app::{AccountKind, App};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use super::Palette;
use crate::{InputState, input::MenuItem};

const ACTIVE_PREFIX: &str = "> ";
const INACTIVE_PREFIX: &str = "  ";

/// Build list rows, numbering each one for its hotkey.
fn rows<'a>(labels: Vec<Line<'a>>, cursor: usize, palette: Palette) -> Vec<ListItem<'a>> {
    labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let (prefix, style) = if i == cursor {
                (ACTIVE_PREFIX, palette.highlight())
            } else {
                (INACTIVE_PREFIX, palette.base())
            };
            let mut spans = vec![Span::raw(prefix), Span::raw(format!("{}. ", i + 1))];
            spans.extend(label.spans);
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect()
}

/// Render the account selection screen.
pub fn render_accounts(
    frame: &mut Frame,
    app: &App,
    input: &InputState,
    palette: Palette,
    area: Rect,
) {
    let labels = AccountKind::ALL
        .iter()
        .map(|&kind| {
            let balance = app.balance(kind).unwrap_or_default();
            Line::from(format!("{} Account   Balance: {balance}", kind.label()))
        })
        .collect();

    let list = List::new(rows(labels, input.cursor(), palette)).block(palette.block("Select Account"));
    frame.render_widget(list, area);
}

/// Render the operation menu with the selected account's balance on top.
pub fn render_menu(frame: &mut Frame, app: &App, input: &InputState, palette: Palette, area: Rect) {
    const BALANCE_HEIGHT: u16 = 4;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(BALANCE_HEIGHT), Constraint::Min(0)])
        .split(area);

    let [balance_area, menu_area] = chunks.as_ref() else {
        return;
    };

    let balance = app.view_balance().unwrap_or_default();
    let summary = Paragraph::new(vec![
        Line::from("Available Balance"),
        Line::from(balance.to_string()).style(palette.highlight()),
    ])
    .alignment(Alignment::Center)
    .block(palette.block(app.selected_kind().map_or("Account", AccountKind::label)));
    frame.render_widget(summary, *balance_area);

    let labels = MenuItem::ALL.iter().map(|item| Line::from(item.label())).collect();
    let list = List::new(rows(labels, input.cursor(), palette)).block(palette.block("Menu"));
    frame.render_widget(list, *menu_area);
}

/// Render the withdrawal denominations.
pub fn render_withdrawal(
    frame: &mut Frame,
    app: &App,
    input: &InputState,
    palette: Palette,
    area: Rect,
) {
    let labels = app.denominations().iter().map(|amount| Line::from(amount.to_string())).collect();
    let list = List::new(rows(labels, input.cursor(), palette)).block(palette.block("Withdraw"));
    frame.render_widget(list, area);
}
