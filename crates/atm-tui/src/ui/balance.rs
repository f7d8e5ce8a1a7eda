//! Balance display

use atm_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::Palette;

/// Render the balance screen.
pub fn render(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let (title, balance) = app.selected_account().map_or_else(
        || (String::new(), String::from("$0")),
        |account| (format!("{} Account Balance", account.kind.label()), account.balance.to_string()),
    );

    let lines = vec![
        Line::from(""),
        Line::from(title),
        Line::from(balance).style(palette.highlight()),
        Line::from(""),
        Line::from("[Enter] back to menu"),
    ];

    let paragraph =
        Paragraph::new(lines).alignment(Alignment::Center).block(palette.block("Balance"));
    frame.render_widget(paragraph, area);
}
