//! Observable session state types.
//!
//! These are the view-model types the front end renders from: the current
//! [`Screen`], the [`Account`] collection entries, notifications, and the
//! cosmetic [`Theme`].

use std::{fmt, str::FromStr};

use crate::Amount;

/// Step in the navigation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// PIN entry. Reachable without authentication.
    Pin,
    /// Account selection.
    Account,
    /// Operation menu for the selected account.
    Menu,
    /// Fixed-denomination withdrawal.
    Withdrawal,
    /// Free-text deposit.
    Deposit,
    /// Balance display.
    Balance,
}

impl Screen {
    /// All screens in flow order.
    pub const ALL: [Self; 6] =
        [Self::Pin, Self::Account, Self::Menu, Self::Withdrawal, Self::Deposit, Self::Balance];

    /// True for screens that may only be shown to an authenticated user.
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Pin)
    }

    /// True for screens that operate on the selected account.
    pub fn requires_selection(self) -> bool {
        matches!(self, Self::Menu | Self::Withdrawal | Self::Deposit | Self::Balance)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pin => "pin",
            Self::Account => "account",
            Self::Menu => "menu",
            Self::Withdrawal => "withdrawal",
            Self::Deposit => "deposit",
            Self::Balance => "balance",
        };
        f.write_str(name)
    }
}

/// Targets reachable from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    /// Withdraw cash.
    Withdrawal,
    /// Deposit funds.
    Deposit,
    /// Show the balance.
    Balance,
    /// Switch to another account.
    Account,
}

impl MenuTarget {
    /// Screen this target leads to.
    pub fn screen(self) -> Screen {
        match self {
            Self::Withdrawal => Screen::Withdrawal,
            Self::Deposit => Screen::Deposit,
            Self::Balance => Screen::Balance,
            Self::Account => Screen::Account,
        }
    }
}

/// Account kind. Exactly one account exists per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountKind {
    /// Current (checking) account.
    Current,
    /// Savings account.
    Savings,
}

impl AccountKind {
    /// All kinds in display order.
    pub const ALL: [Self; 2] = [Self::Current, Self::Savings];

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Savings => "Savings",
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => f.write_str("current"),
            Self::Savings => f.write_str("savings"),
        }
    }
}

impl FromStr for AccountKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "current" => Ok(Self::Current),
            "savings" => Ok(Self::Savings),
            other => Err(format!("unknown account kind {other:?}")),
        }
    }
}

/// A named balance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Account {
    /// Account kind, unique within the collection.
    pub kind: AccountKind,
    /// Current balance.
    pub balance: Amount,
}

/// Blocking, user-visible message produced by an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Wrong PIN.
    InvalidPin,
    /// Withdrawal larger than the balance.
    InsufficientFunds,
    /// Deposit or withdrawal amount rejected.
    InvalidAmount,
    /// Withdrawal succeeded.
    Withdrawn(Amount),
    /// Deposit succeeded.
    Deposited(Amount),
}

impl Notification {
    /// True for notifications reporting a rejected intent.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::InvalidPin | Self::InsufficientFunds | Self::InvalidAmount)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin => f.write_str("Invalid PIN"),
            Self::InsufficientFunds => f.write_str("Insufficient funds"),
            Self::InvalidAmount => f.write_str("Please enter a valid amount"),
            Self::Withdrawn(amount) => write!(f, "Successfully withdrawn {amount}"),
            Self::Deposited(amount) => write!(f, "Successfully deposited {amount}"),
        }
    }
}

/// Cosmetic color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light background.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
