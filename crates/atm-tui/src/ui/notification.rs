//! Notification modal
//!
//! Draws the visible notification in a centered box over the current screen.

use atm_app::Notification;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Clear, Paragraph, Wrap},
};

use super::Palette;

const MODAL_WIDTH: u16 = 44;
const MODAL_HEIGHT: u16 = 6;

/// Rectangle of at most `width` x `height` centered in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x.saturating_add((area.width - width) / 2),
        y: area.y.saturating_add((area.height - height) / 2),
        width,
        height,
    }
}

/// Render the modal.
pub fn render(frame: &mut Frame, notification: &Notification, palette: Palette) {
    let area = centered(frame.area(), MODAL_WIDTH, MODAL_HEIGHT);

    let (title, color) =
        if notification.is_error() { ("Error", Color::Red) } else { ("Success", palette.accent) };

    let lines = vec![
        Line::from(notification.to_string()).style(palette.base().fg(color)),
        Line::from(""),
        Line::from("press any key").style(palette.base().fg(palette.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(palette.block(title).border_style(Style::default().fg(color)));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
