//! Deposit entry
//!
//! Displays the pending deposit text with a cursor.

use atm_app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
};

use super::Palette;

const ENTRY_LINE_OFFSET_Y: u16 = 2; // border + blank line
const BORDER_WIDTH: u16 = 1;

/// Render the deposit screen.
pub fn render(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let text = app.pending_deposit();
    let entry = if text.is_empty() {
        Line::from("Enter amount").style(palette.base().fg(palette.muted))
    } else {
        Line::from(format!("${text}")).style(palette.highlight())
    };

    let lines = vec![
        Line::from(""),
        entry,
        Line::from(""),
        Line::from("[Enter] deposit   [Esc] back"),
    ];

    let paragraph =
        Paragraph::new(lines).alignment(Alignment::Center).block(palette.block("Deposit"));
    frame.render_widget(paragraph, area);

    // Cursor sits after the centered entry text.
    let inner_width = area.width.saturating_sub(BORDER_WIDTH * 2);
    let shown = if text.is_empty() { 0 } else { text.len() as u16 + 1 };
    let start = inner_width.saturating_sub(shown) / 2;
    let cursor_x = area
        .x
        .saturating_add(BORDER_WIDTH)
        .saturating_add(start)
        .saturating_add(shown)
        .min(area.x.saturating_add(area.width).saturating_sub(BORDER_WIDTH + 1));
    let cursor_y = area.y.saturating_add(ENTRY_LINE_OFFSET_Y);

    frame.set_cursor_position((cursor_x, cursor_y));
}
