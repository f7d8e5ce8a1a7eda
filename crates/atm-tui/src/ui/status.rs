//! Status bar
//!
//! Displays the session state and the keys that work on every screen.

use atm_app::{App, Screen};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Palette;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let session = if app.is_authenticated() {
        Span::styled("Authenticated", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("Locked", Style::default().fg(Color::Red))
    };

    let account = app
        .selected_kind()
        .map_or_else(String::new, |kind| format!(" | Account: {}", kind.label()));

    let hint = match app.screen() {
        Screen::Pin => " | [t] theme  [q] quit",
        _ => " | [t] theme  [Esc] back",
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        session,
        Span::raw(account),
        Span::raw(format!(" | Screen: {}", app.screen())),
        Span::raw(hint),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(palette.muted).fg(Color::White));

    frame.render_widget(paragraph, area);
}
