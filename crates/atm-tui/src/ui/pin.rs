//! PIN entry
//!
//! Shows one `*` per entered digit and the keypad hints.

use atm_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::Palette;

/// Render the PIN screen.
pub fn render(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let masked = app.masked_pin();
    let entry = if masked.is_empty() {
        Line::from("Enter PIN").style(palette.base().fg(palette.muted))
    } else {
        Line::from(masked).style(palette.highlight())
    };

    let lines = vec![
        Line::from(""),
        entry,
        Line::from(""),
        Line::from("[0-9] digit   [Backspace] delete   [Enter] submit"),
    ];

    let paragraph =
        Paragraph::new(lines).alignment(Alignment::Center).block(palette.block("PIN"));
    frame.render_widget(paragraph, area);
}
