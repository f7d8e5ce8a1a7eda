//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod balance;
mod deposit;
mod lists;
mod notification;
mod pin;
mod status;

use atm_app::{App, Screen, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::InputState;

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    /// Screen background.
    pub background: Color,
    /// Regular text.
    pub text: Color,
    /// Highlighted rows and amounts.
    pub accent: Color,
    /// Borders and hints.
    pub muted: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::DarkGray,
                text: Color::LightGreen,
                accent: Color::Yellow,
                muted: Color::Gray,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::Green,
                accent: Color::LightGreen,
                muted: Color::DarkGray,
            },
        }
    }

    pub(crate) fn base(self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub(crate) fn highlight(self) -> Style {
        Style::default().fg(self.accent).bg(self.background).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn block(self, title: &str) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.muted))
            .title(format!(" {title} "))
            .style(self.base())
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState) {
    const HEADER_HEIGHT: u16 = 4;
    const BODY_MIN_HEIGHT: u16 = 5;
    const STATUS_HEIGHT: u16 = 1;

    let palette = Palette::for_theme(app.theme());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    let [header_area, body_area, status_area] = chunks.as_ref() else {
        return;
    };

    render_header(frame, palette, *header_area);
    render_body(frame, app, input, palette, *body_area);
    status::render(frame, app, palette, *status_area);

    if let Some(notification) = app.notification() {
        notification::render(frame, notification, palette);
    }
}

fn render_header(frame: &mut Frame, palette: Palette, area: Rect) {
    let lines = vec![
        Line::from("ATM MACHINE").style(palette.highlight()),
        Line::from("Welcome to Ferris Bank"),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(palette.base()));

    frame.render_widget(paragraph, area);
}

fn render_body(frame: &mut Frame, app: &App, input: &InputState, palette: Palette, area: Rect) {
    match app.screen() {
        Screen::Pin => pin::render(frame, app, palette, area),
        Screen::Account => lists::render_accounts(frame, app, input, palette, area),
        Screen::Menu => lists::render_menu(frame, app, input, palette, area),
        Screen::Withdrawal => lists::render_withdrawal(frame, app, input, palette, area),
        Screen::Deposit => deposit::render(frame, app, palette, area),
        Screen::Balance => balance::render(frame, app, palette, area),
    }
}

#[cfg(test)]
mod tests {
    use atm_app::{AccountKind, Amount, MenuTarget};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| render(f, app, &InputState::new())).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn on_menu() -> App {
        let mut app = App::default();
        for d in [1, 2, 3, 4] {
            app.digit_press(d);
        }
        app.submit_pin();
        app.select_account(AccountKind::Current);
        app
    }

    #[test]
    fn pin_screen_masks_digits() {
        let mut app = App::default();
        app.digit_press(4);
        app.digit_press(2);

        let screen = draw(&app);
        assert!(screen.contains("ATM MACHINE"));
        assert!(screen.contains("**"));
        assert!(!screen.contains("42"));
    }

    #[test]
    fn account_screen_lists_balances() {
        let mut app = on_menu();
        app.navigate(MenuTarget::Account);

        let screen = draw(&app);
        assert!(screen.contains("Current Account"));
        assert!(screen.contains("Savings Account"));
        assert!(screen.contains("$5000"));
    }

    #[test]
    fn menu_shows_available_balance() {
        let screen = draw(&on_menu());
        assert!(screen.contains("Available Balance"));
        assert!(screen.contains("$1000"));
        assert!(screen.contains("WITHDRAW"));
        assert!(screen.contains("EXIT"));
    }

    #[test]
    fn withdrawal_lists_denominations() {
        let mut app = on_menu();
        app.navigate(MenuTarget::Withdrawal);

        let screen = draw(&app);
        for amount in ["$20", "$50", "$100", "$200", "$500", "$1000"] {
            assert!(screen.contains(amount), "missing {amount}");
        }
    }

    #[test]
    fn deposit_shows_pending_text() {
        let mut app = on_menu();
        app.navigate(MenuTarget::Deposit);
        app.update_deposit_text("12.5");

        assert!(draw(&app).contains("12.5"));
    }

    #[test]
    fn balance_screen_names_account() {
        let mut app = on_menu();
        app.navigate(MenuTarget::Balance);

        let screen = draw(&app);
        assert!(screen.contains("Current Account Balance"));
        assert!(screen.contains("$1000"));
    }

    #[test]
    fn notification_is_drawn_on_top() {
        let mut app = on_menu();
        app.navigate(MenuTarget::Withdrawal);
        app.withdraw(Amount::from_units(50));

        let screen = draw(&app);
        assert!(screen.contains("Successfully withdrawn $50"));
    }
}
