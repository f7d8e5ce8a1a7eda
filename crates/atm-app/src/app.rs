//! Session state machine.
//!
//! This module defines the [`App`] state machine, which owns the whole
//! session: authentication, PIN entry, account selection, the current screen,
//! pending deposit text, and the canonical account collection.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs (or
//! direct intent calls) and produces [`crate::AppAction`] instructions for the
//! runtime to execute. Failures never escape as errors; they come back as
//! [`AppAction::Notify`] and leave the machine on a valid screen.
//!
//! # Flow
//!
//! ```text
//! pin --submit--> account --select--> menu --+--> withdrawal --+
//!  ^                 ^                  ^    +--> deposit -----+--back--> menu
//!  |                 +----switch--------+    +--> balance -----+
//!  +---------------------exit------------------------------------
//! ```

use crate::{
    Account, AccountKind, Accounts, Amount, AppAction, AppEvent, AtmConfig, AtmError, Intent,
    MenuTarget, Notification, Screen, Theme, config::PIN_LENGTH,
};

/// Session state machine.
///
/// Pure state machine that processes intents and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Secret PIN, seeds and denominations.
    config: AtmConfig,
    /// Canonical balances. Survive [`App::exit`].
    accounts: Accounts,
    /// Whether the PIN has been accepted.
    authenticated: bool,
    /// Digits entered so far. At most [`PIN_LENGTH`] long.
    entered_pin: String,
    /// Kind of the account being operated on. `None` until one is chosen.
    selected: Option<AccountKind>,
    /// Current step in the flow.
    screen: Screen,
    /// Raw deposit text, validated only on confirm.
    pending_deposit: String,
    /// Visible notification. `None` if nothing to show.
    notification: Option<Notification>,
    /// Cosmetic theme.
    theme: Theme,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl Default for App {
    fn default() -> Self {
        Self::new(AtmConfig::default())
    }
}

impl App {
    /// Create a new App on the PIN screen with freshly seeded accounts.
    pub fn new(config: AtmConfig) -> Self {
        let accounts = Accounts::seeded(&config.seed_balances);
        Self {
            config,
            accounts,
            authenticated: false,
            entered_pin: String::new(),
            selected: None,
            screen: Screen::Pin,
            pending_deposit: String::new(),
            notification: None,
            theme: Theme::default(),
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Intent(intent) => self.apply(intent),
        }
    }

    /// Dispatch a single intent.
    pub fn apply(&mut self, intent: Intent) -> Vec<AppAction> {
        match intent {
            Intent::DigitPress(digit) => self.digit_press(digit),
            Intent::Backspace => self.backspace(),
            Intent::SubmitPin => self.submit_pin(),
            Intent::SelectAccount(kind) => self.select_account(kind),
            Intent::Navigate(target) => self.navigate(target),
            Intent::Withdraw(amount) => self.withdraw(amount),
            Intent::UpdateDepositText(text) => self.update_deposit_text(text),
            Intent::ConfirmDeposit => self.confirm_deposit(),
            Intent::Back => self.back(),
            Intent::Exit => self.exit(),
            Intent::Dismiss => self.dismiss(),
            Intent::ToggleTheme => self.toggle_theme(),
            Intent::Quit => self.quit(),
        }
    }

    /// Append a digit to the PIN entry. Extra digits past four are dropped.
    pub fn digit_press(&mut self, digit: u8) -> Vec<AppAction> {
        if !self.on(Screen::Pin, "digit_press") {
            return vec![];
        }
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            tracing::debug!(digit, "ignoring non-decimal digit");
            return vec![];
        };
        if self.entered_pin.len() >= PIN_LENGTH {
            return vec![];
        }
        self.entered_pin.push(c);
        vec![AppAction::Render]
    }

    /// Remove the last PIN digit, if any.
    pub fn backspace(&mut self) -> Vec<AppAction> {
        if !self.on(Screen::Pin, "backspace") {
            return vec![];
        }
        if self.entered_pin.pop().is_none() {
            return vec![];
        }
        vec![AppAction::Render]
    }

    /// Check the entered PIN against the configured secret.
    ///
    /// On mismatch the entry is cleared and the user stays on the PIN screen.
    pub fn submit_pin(&mut self) -> Vec<AppAction> {
        if !self.on(Screen::Pin, "submit_pin") {
            return vec![];
        }

        if self.entered_pin == self.config.secret_pin {
            tracing::info!("PIN accepted");
            self.authenticated = true;
            self.transition(Screen::Account);
            vec![AppAction::Render]
        } else {
            tracing::warn!(digits = self.entered_pin.len(), "PIN rejected");
            self.entered_pin.clear();
            self.fail(&AtmError::AuthenticationFailed)
        }
    }

    /// Choose the account to operate on and open the menu.
    pub fn select_account(&mut self, kind: AccountKind) -> Vec<AppAction> {
        if !self.authenticated || !self.on(Screen::Account, "select_account") {
            return vec![];
        }
        if self.accounts.get(kind).is_none() {
            return self.fail(&AtmError::UnknownAccount(kind));
        }

        tracing::debug!(%kind, "account selected");
        self.selected = Some(kind);
        self.transition(Screen::Menu);
        vec![AppAction::Render]
    }

    /// Move from the menu to `target`.
    ///
    /// Switching account keeps the previous selection until a new one is
    /// chosen.
    pub fn navigate(&mut self, target: MenuTarget) -> Vec<AppAction> {
        if !self.authenticated || !self.on(Screen::Menu, "navigate") {
            return vec![];
        }
        self.transition(target.screen());
        vec![AppAction::Render]
    }

    /// Withdraw `amount` from the selected account.
    ///
    /// Succeeds only if the balance covers the amount; otherwise nothing
    /// changes and the user stays on the withdrawal screen.
    pub fn withdraw(&mut self, amount: Amount) -> Vec<AppAction> {
        if !self.on(Screen::Withdrawal, "withdraw") {
            return vec![];
        }
        let Some(kind) = self.selected else {
            tracing::debug!("ignoring withdraw without a selected account");
            return vec![];
        };

        match self.accounts.withdraw(kind, amount) {
            Ok(balance) => {
                tracing::info!(%kind, %amount, %balance, "withdrawal complete");
                self.transition(Screen::Menu);
                self.notify(Notification::Withdrawn(amount))
            },
            Err(err) => self.fail(&err),
        }
    }

    /// Withdraw the denomination at `index` of the configured list.
    pub fn withdraw_denomination(&mut self, index: usize) -> Vec<AppAction> {
        match self.config.withdrawal_denominations.get(index) {
            Some(&amount) => self.withdraw(amount),
            None => vec![],
        }
    }

    /// Replace the pending deposit text. Validation happens on confirm.
    pub fn update_deposit_text(&mut self, text: impl Into<String>) -> Vec<AppAction> {
        if !self.on(Screen::Deposit, "update_deposit_text") {
            return vec![];
        }
        self.pending_deposit = text.into();
        vec![AppAction::Render]
    }

    /// Parse the pending deposit text and credit the selected account.
    pub fn confirm_deposit(&mut self) -> Vec<AppAction> {
        if !self.on(Screen::Deposit, "confirm_deposit") {
            return vec![];
        }
        let Some(kind) = self.selected else {
            tracing::debug!("ignoring deposit without a selected account");
            return vec![];
        };

        let result = self
            .pending_deposit
            .parse::<Amount>()
            .and_then(|amount| self.accounts.deposit(kind, amount).map(|balance| (amount, balance)));

        match result {
            Ok((amount, balance)) => {
                tracing::info!(%kind, %amount, %balance, "deposit complete");
                self.pending_deposit.clear();
                self.transition(Screen::Menu);
                self.notify(Notification::Deposited(amount))
            },
            Err(err) => self.fail(&err),
        }
    }

    /// Balance of the selected account. Pure read.
    pub fn view_balance(&self) -> Option<Amount> {
        self.selected_account().map(|account| account.balance)
    }

    /// Return to the menu from an operation screen.
    ///
    /// Leaving the deposit screen discards the pending text.
    pub fn back(&mut self) -> Vec<AppAction> {
        match self.screen {
            Screen::Withdrawal | Screen::Balance => {},
            Screen::Deposit => self.pending_deposit.clear(),
            Screen::Pin | Screen::Account | Screen::Menu => {
                tracing::debug!(screen = %self.screen, "ignoring back");
                return vec![];
            },
        }
        self.transition(Screen::Menu);
        vec![AppAction::Render]
    }

    /// End the session and return to the PIN screen.
    ///
    /// Balances are left untouched: they belong to the accounts, not to the
    /// session.
    pub fn exit(&mut self) -> Vec<AppAction> {
        tracing::info!(from = %self.screen, "session ended");
        self.authenticated = false;
        self.entered_pin.clear();
        self.selected = None;
        self.pending_deposit.clear();
        self.screen = Screen::Pin;
        vec![AppAction::Render]
    }

    /// Clear the visible notification.
    pub fn dismiss(&mut self) -> Vec<AppAction> {
        if self.notification.take().is_none() {
            return vec![];
        }
        vec![AppAction::Render]
    }

    /// Flip between light and dark themes.
    pub fn toggle_theme(&mut self) -> Vec<AppAction> {
        self.theme = self.theme.toggled();
        vec![AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Check the current screen, logging ignored intents.
    fn on(&self, screen: Screen, intent: &'static str) -> bool {
        if self.screen == screen {
            return true;
        }
        tracing::debug!(intent, screen = %self.screen, "ignoring intent on this screen");
        false
    }

    fn transition(&mut self, to: Screen) {
        tracing::debug!(from = %self.screen, %to, "screen transition");
        self.screen = to;
    }

    fn notify(&mut self, notification: Notification) -> Vec<AppAction> {
        self.notification = Some(notification.clone());
        vec![AppAction::Notify(notification), AppAction::Render]
    }

    fn fail(&mut self, err: &AtmError) -> Vec<AppAction> {
        let notification = match err {
            AtmError::AuthenticationFailed => Notification::InvalidPin,
            AtmError::InsufficientFunds { .. } => Notification::InsufficientFunds,
            AtmError::InvalidAmount { .. } => Notification::InvalidAmount,
            AtmError::UnknownAccount(_) => {
                tracing::error!(%err, "account collection out of sync");
                return vec![];
            },
        };
        tracing::debug!(%err, "intent rejected");
        self.notify(notification)
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the PIN has been accepted.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Digits entered so far.
    pub fn entered_pin(&self) -> &str {
        &self.entered_pin
    }

    /// One `*` per entered digit.
    pub fn masked_pin(&self) -> String {
        "*".repeat(self.entered_pin.len())
    }

    /// Kind of the selected account. `None` if none chosen.
    pub fn selected_kind(&self) -> Option<AccountKind> {
        self.selected
    }

    /// Selected account, looked up in the canonical collection.
    pub fn selected_account(&self) -> Option<Account> {
        self.selected.and_then(|kind| self.accounts.get(kind))
    }

    /// All accounts.
    pub fn accounts(&self) -> &Accounts {
        &self.accounts
    }

    /// Balance of the account of `kind`.
    pub fn balance(&self, kind: AccountKind) -> Option<Amount> {
        self.accounts.get(kind).map(|account| account.balance)
    }

    /// Raw pending deposit text.
    pub fn pending_deposit(&self) -> &str {
        &self.pending_deposit
    }

    /// Withdrawal amounts on offer.
    pub fn denominations(&self) -> &[Amount] {
        &self.config.withdrawal_denominations
    }

    /// Visible notification. `None` if nothing to show.
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
