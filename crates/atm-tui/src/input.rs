//! Input state and key handling for the TUI.
//!
//! This module owns the list cursor used on the account, menu and withdrawal
//! screens and translates key presses into [`Intent`]s for the current
//! screen. While a notification is visible, any key dismisses it.

use atm_app::{AccountKind, App, AppAction, Intent, KeyInput, MenuTarget, Screen};

/// Entries of the operation menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Open the withdrawal screen.
    Withdraw,
    /// Open the deposit screen.
    Deposit,
    /// Open the balance screen.
    Balance,
    /// Pick another account.
    Switch,
    /// End the session.
    Exit,
}

impl MenuItem {
    /// All items in display order.
    pub const ALL: [Self; 5] =
        [Self::Withdraw, Self::Deposit, Self::Balance, Self::Switch, Self::Exit];

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            Self::Withdraw => "WITHDRAW",
            Self::Deposit => "DEPOSIT",
            Self::Balance => "BALANCE",
            Self::Switch => "SWITCH",
            Self::Exit => "EXIT",
        }
    }

    fn intent(self) -> Intent {
        match self {
            Self::Withdraw => Intent::Navigate(MenuTarget::Withdrawal),
            Self::Deposit => Intent::Navigate(MenuTarget::Deposit),
            Self::Balance => Intent::Navigate(MenuTarget::Balance),
            Self::Switch => Intent::Navigate(MenuTarget::Account),
            Self::Exit => Intent::Exit,
        }
    }
}

/// Input state for the TUI.
///
/// Tracks the highlighted row of list screens. The cursor resets whenever
/// the screen changes.
#[derive(Debug)]
pub struct InputState {
    /// Highlighted row on list screens.
    cursor: usize,
    /// Screen the cursor belongs to.
    screen: Screen,
}

impl Default for InputState {
    fn default() -> Self {
        Self { cursor: 0, screen: Screen::Pin }
    }
}

impl InputState {
    /// Create a new input state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted row on list screens.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Handle a key input event.
    ///
    /// Returns the actions produced by the App, or an empty list if the key
    /// means nothing on the current screen.
    pub fn handle_key(&mut self, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        self.sync(app.screen());

        if app.notification().is_some() {
            return app.apply(Intent::Dismiss);
        }

        let actions = match app.screen() {
            Screen::Pin => Self::pin_key(key, app),
            Screen::Account => self.list_key(key, app, AccountKind::ALL.len(), |app, row| {
                AccountKind::ALL.get(row).map(|&kind| app.apply(Intent::SelectAccount(kind)))
            }),
            Screen::Menu => self.list_key(key, app, MenuItem::ALL.len(), |app, row| {
                MenuItem::ALL.get(row).map(|item| app.apply(item.intent()))
            }),
            Screen::Withdrawal => {
                let rows = app.denominations().len();
                self.list_key(key, app, rows, |app, row| Some(app.withdraw_denomination(row)))
            },
            Screen::Deposit => Self::deposit_key(key, app),
            Screen::Balance => match key {
                KeyInput::Enter | KeyInput::Esc | KeyInput::Backspace => app.apply(Intent::Back),
                _ => Self::global_key(key, app),
            },
        };

        self.sync(app.screen());
        actions
    }

    /// Reset the cursor when the screen changed.
    fn sync(&mut self, screen: Screen) {
        if self.screen != screen {
            self.screen = screen;
            self.cursor = 0;
        }
    }

    fn pin_key(key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).and_then(|d| u8::try_from(d).ok()).unwrap_or_default();
                app.apply(Intent::DigitPress(digit))
            },
            KeyInput::Backspace => app.apply(Intent::Backspace),
            KeyInput::Enter => app.apply(Intent::SubmitPin),
            KeyInput::Esc | KeyInput::Char('q') => app.apply(Intent::Quit),
            _ => Self::global_key(key, app),
        }
    }

    /// Shared handling for account, menu and withdrawal lists.
    ///
    /// Up/Down move the cursor, digits 1-9 pick a row directly, Enter picks
    /// the highlighted row. Esc goes back (or logs out from the top level).
    fn list_key<F>(&mut self, key: KeyInput, app: &mut App, rows: usize, choose: F) -> Vec<AppAction>
    where
        F: FnOnce(&mut App, usize) -> Option<Vec<AppAction>>,
    {
        match key {
            KeyInput::Up => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(rows.saturating_sub(1));
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.cursor = if self.cursor + 1 >= rows { 0 } else { self.cursor + 1 };
                vec![AppAction::Render]
            },
            KeyInput::Enter => choose(app, self.cursor).unwrap_or_default(),
            KeyInput::Char(c @ '1'..='9') => {
                let row = c.to_digit(10).map_or(0, |d| d as usize - 1);
                if row < rows { choose(app, row).unwrap_or_default() } else { vec![] }
            },
            KeyInput::Esc | KeyInput::Backspace => match app.screen() {
                Screen::Account | Screen::Menu => app.apply(Intent::Exit),
                _ => app.apply(Intent::Back),
            },
            _ => Self::global_key(key, app),
        }
    }

    fn deposit_key(key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) if c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E') => {
                let mut text = app.pending_deposit().to_string();
                text.push(c);
                app.apply(Intent::UpdateDepositText(text))
            },
            KeyInput::Backspace => {
                let mut text = app.pending_deposit().to_string();
                if text.pop().is_none() {
                    return vec![];
                }
                app.apply(Intent::UpdateDepositText(text))
            },
            KeyInput::Enter => app.apply(Intent::ConfirmDeposit),
            KeyInput::Esc => app.apply(Intent::Back),
            _ => Self::global_key(key, app),
        }
    }

    /// Keys that work on every screen.
    fn global_key(key: KeyInput, app: &mut App) -> Vec<AppAction> {
        match key {
            KeyInput::Char('t') => app.apply(Intent::ToggleTheme),
            _ => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use atm_app::{Amount, Notification, Theme};

    use super::*;

    fn press(input: &mut InputState, app: &mut App, keys: &[KeyInput]) -> Vec<AppAction> {
        keys.iter().flat_map(|&key| input.handle_key(key, app)).collect()
    }

    fn type_str(input: &mut InputState, app: &mut App, text: &str) {
        for c in text.chars() {
            input.handle_key(KeyInput::Char(c), app);
        }
    }

    fn logged_in() -> (InputState, App) {
        let mut input = InputState::new();
        let mut app = App::default();
        type_str(&mut input, &mut app, "1234");
        input.handle_key(KeyInput::Enter, &mut app);
        (input, app)
    }

    #[test]
    fn digits_build_pin() {
        let mut input = InputState::new();
        let mut app = App::default();

        type_str(&mut input, &mut app, "12x");
        assert_eq!(app.entered_pin(), "12");

        input.handle_key(KeyInput::Backspace, &mut app);
        assert_eq!(app.entered_pin(), "1");
    }

    #[test]
    fn enter_submits_pin() {
        let (_, app) = logged_in();
        assert_eq!(app.screen(), Screen::Account);
    }

    #[test]
    fn any_key_dismisses_notification() {
        let mut input = InputState::new();
        let mut app = App::default();

        input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.notification(), Some(&Notification::InvalidPin));

        input.handle_key(KeyInput::Char('5'), &mut app);
        assert_eq!(app.notification(), None);
        assert_eq!(app.entered_pin(), "");
    }

    #[test]
    fn arrows_and_enter_select_account() {
        let (mut input, mut app) = logged_in();

        press(&mut input, &mut app, &[KeyInput::Down, KeyInput::Enter]);

        assert_eq!(app.selected_kind(), Some(AccountKind::Savings));
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn cursor_wraps() {
        let (mut input, mut app) = logged_in();
        input.handle_key(KeyInput::Up, &mut app);
        assert_eq!(input.cursor(), 1);
        input.handle_key(KeyInput::Down, &mut app);
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn hotkeys_drive_withdrawal() {
        let (mut input, mut app) = logged_in();

        // Current account, menu item 1 (withdraw), denomination 4 ($200)
        type_str(&mut input, &mut app, "114");

        assert_eq!(app.balance(AccountKind::Current), Some(Amount::from_units(800)));
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.notification(), Some(&Notification::Withdrawn(Amount::from_units(200))));
    }

    #[test]
    fn deposit_text_editing() {
        let (mut input, mut app) = logged_in();
        type_str(&mut input, &mut app, "12");
        assert_eq!(app.screen(), Screen::Deposit);

        type_str(&mut input, &mut app, "75x");
        input.handle_key(KeyInput::Backspace, &mut app);
        type_str(&mut input, &mut app, "0");
        assert_eq!(app.pending_deposit(), "70");

        input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.balance(AccountKind::Current), Some(Amount::from_units(1070)));
    }

    #[test]
    fn deposit_accepts_exponent_keys() {
        let (mut input, mut app) = logged_in();
        type_str(&mut input, &mut app, "12");

        type_str(&mut input, &mut app, "2.5e1");
        assert_eq!(app.pending_deposit(), "2.5e1");

        input.handle_key(KeyInput::Enter, &mut app);
        assert_eq!(app.balance(AccountKind::Current), Some(Amount::from_units(1025)));
    }

    #[test]
    fn esc_backs_out_then_logs_out() {
        let (mut input, mut app) = logged_in();
        type_str(&mut input, &mut app, "13");
        assert_eq!(app.screen(), Screen::Balance);

        input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(app.screen(), Screen::Menu);

        input.handle_key(KeyInput::Esc, &mut app);
        assert_eq!(app.screen(), Screen::Pin);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn esc_on_pin_quits() {
        let mut input = InputState::new();
        let mut app = App::default();
        assert_eq!(input.handle_key(KeyInput::Esc, &mut app), vec![AppAction::Quit]);
    }

    #[test]
    fn t_toggles_theme() {
        let mut input = InputState::new();
        let mut app = App::default();
        input.handle_key(KeyInput::Char('t'), &mut app);
        assert_eq!(app.theme(), Theme::Dark);
    }
}
