//! Application input events.
//!
//! [`AppEvent`] is the set of inputs that drive the [`crate::App`] state
//! machine. [`Intent`] is one discrete user request: a digit press, a menu
//! choice, a withdrawal amount, and so on. Front ends translate raw
//! [`crate::KeyInput`] into intents; tests usually construct intents directly.

use crate::{AccountKind, Amount, MenuTarget};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// A user intent.
    Intent(Intent),
}

/// One discrete user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Append a digit (0-9) to the PIN entry.
    DigitPress(u8),
    /// Remove the last PIN digit.
    Backspace,
    /// Check the entered PIN.
    SubmitPin,
    /// Choose the account to operate on.
    SelectAccount(AccountKind),
    /// Move from the menu to another screen.
    Navigate(MenuTarget),
    /// Withdraw an amount from the selected account.
    Withdraw(Amount),
    /// Replace the pending deposit text.
    UpdateDepositText(String),
    /// Parse and apply the pending deposit.
    ConfirmDeposit,
    /// Return to the menu.
    Back,
    /// End the session.
    Exit,
    /// Dismiss the visible notification.
    Dismiss,
    /// Flip the color theme.
    ToggleTheme,
    /// Quit the application.
    Quit,
}

impl From<Intent> for AppEvent {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}
